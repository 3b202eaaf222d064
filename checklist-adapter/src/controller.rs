use std::sync::Arc;

use checklist::{ChecklistItem, ItemId, RowEdit, compute_edit_script};

use crate::surface::RowSurface;

/// A callback fired when a row is tapped or long-pressed.
///
/// It receives the row index and the stable identity of the item the row currently displays, so
/// handlers always act on the authoritative identity even if the content shown at tap time is
/// stale by a snapshot.
pub type RowClickHandler = Arc<dyn Fn(usize, ItemId) + Send + Sync>;

/// A framework-neutral controller that owns the currently displayed checklist and patches a
/// [`RowSurface`] from successive storage snapshots.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `submit_list` whenever storage produces a fresh snapshot
/// - `click` / `long_click` when the UI reports row interaction
///
/// All methods must be called on the UI-affinity thread; the displayed list is confined to that
/// thread by `&mut` access rather than locking.
pub struct ListController<S> {
    surface: S,
    displayed: Vec<ChecklistItem>,
    on_click: Option<RowClickHandler>,
    on_long_click: Option<RowClickHandler>,
}

impl<S: RowSurface> ListController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            displayed: Vec::new(),
            on_click: None,
            on_long_click: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The sequence currently rendered, in display order.
    pub fn displayed(&self) -> &[ChecklistItem] {
        &self.displayed
    }

    /// Replaces the displayed list with `new_items`.
    ///
    /// Computes the edit script against the current list, applies each edit to the surface in
    /// script order, then swaps the displayed list wholesale (never partially mutated in place).
    /// Rows whose identity and content both persisted are not touched at all, so their visual
    /// elements survive without flicker.
    pub fn submit_list(&mut self, new_items: Vec<ChecklistItem>) {
        let script = compute_edit_script(&self.displayed, &new_items);
        cdebug!(
            displayed = self.displayed.len(),
            submitted = new_items.len(),
            edits = script.len(),
            "submit_list"
        );
        for edit in &script {
            match *edit {
                RowEdit::Removed { position, .. } => self.surface.remove_row(position),
                RowEdit::Inserted { position, .. } => {
                    self.surface.insert_row(position, &new_items[position])
                }
                RowEdit::Changed { position, .. } => {
                    self.surface.update_row(position, &new_items[position])
                }
            }
        }
        self.displayed = new_items;
    }

    /// Returns the identity of the item the row at `row` currently displays.
    ///
    /// Identity is resolved from the displayed list, never inferred from whatever content the
    /// widget happens to show; recycled row elements therefore cannot leak a stale identity.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not a bound row. Resolving an unbound row is a programming error in
    /// the host, not a recoverable condition.
    pub fn row_identity(&self, row: usize) -> ItemId {
        self.displayed[row].id
    }

    pub fn set_on_row_click(
        &mut self,
        handler: Option<impl Fn(usize, ItemId) + Send + Sync + 'static>,
    ) {
        self.on_click = handler.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_row_long_click(
        &mut self,
        handler: Option<impl Fn(usize, ItemId) + Send + Sync + 'static>,
    ) {
        self.on_long_click = handler.map(|f| Arc::new(f) as _);
    }

    /// Dispatches a tap on `row` to the registered click handler, if any.
    pub fn click(&self, row: usize) {
        let id = self.row_identity(row);
        if let Some(handler) = &self.on_click {
            handler(row, id);
        }
    }

    /// Dispatches a long press on `row` to the registered long-click handler.
    ///
    /// Returns `true` when a handler was invoked, reporting the event as consumed so the host
    /// does not also run its default row behavior.
    pub fn long_click(&self, row: usize) -> bool {
        let id = self.row_identity(row);
        match &self.on_long_click {
            Some(handler) => {
                handler(row, id);
                true
            }
            None => false,
        }
    }
}
