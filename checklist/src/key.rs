#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

#[cfg(feature = "std")]
pub trait DiffKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> DiffKey for T {}

#[cfg(not(feature = "std"))]
pub trait DiffKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> DiffKey for T {}

/// An item the reconciler can align across two list snapshots.
///
/// `key` is the stable identity that follows an item across reorders and content edits;
/// `contents_eq` decides whether a row whose identity survived still needs a visual rebind.
/// Keys must be unique within a single sequence; storage guarantees this for checklist items.
pub trait DiffItem {
    type Key: DiffKey;

    fn key(&self) -> Self::Key;

    fn contents_eq(&self, other: &Self) -> bool;
}
