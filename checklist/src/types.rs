use alloc::string::String;

use crate::key::DiffItem;

/// The stable identity of a checklist item.
///
/// Assigned by the storage layer when the item is created, never reused or changed afterwards.
/// Two items with equal ids are the same item regardless of content.
pub type ItemId = i64;

/// A single checklist entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChecklistItem {
    pub id: ItemId,
    /// Display text. Absent text and empty text are the same content (see [`Self::contents_eq`]).
    pub description: Option<String>,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(id: ItemId, description: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            description: Some(description.into()),
            checked,
        }
    }

    /// The display text, with absent text normalized to the empty string.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Content equality: `checked` plus a null-safe description comparison where `None` and
    /// `Some("")` are equal. The comparison is case-sensitive and does not trim whitespace.
    pub fn contents_eq(&self, other: &Self) -> bool {
        self.checked == other.checked
            && self.description_or_empty() == other.description_or_empty()
    }
}

impl DiffItem for ChecklistItem {
    type Key = ItemId;

    fn key(&self) -> ItemId {
        self.id
    }

    fn contents_eq(&self, other: &Self) -> bool {
        ChecklistItem::contents_eq(self, other)
    }
}

/// One row-level operation in an edit script.
///
/// Scripts are applied in order:
/// - `Removed` positions index the list being patched and are emitted highest-first, so an
///   earlier removal never shifts a later one.
/// - `Inserted` and `Changed` positions index the target list and are emitted lowest-first.
///
/// `Changed` means the row element survives and is rebound with new content; rows whose identity
/// and content both survived do not appear in the script at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowEdit<K = ItemId> {
    Removed { position: usize, key: K },
    Inserted { position: usize, key: K },
    Changed { position: usize, key: K },
}
