use std::sync::Arc;

use checklist::{ChecklistItem, ItemId};

use crate::worker::TaskQueue;

/// The persistent item store, as seen by this crate.
///
/// Implementations own the on-disk format, identity assignment (ids are unique and never
/// reused), and display order. Calls may block on I/O: they are always executed on the
/// background [`TaskQueue`], never on the UI-affinity thread. Failures are the implementation's
/// concern; this crate treats every operation as fire-and-forget or as a fetch that may simply
/// deliver nothing.
pub trait ItemStore: Send + Sync {
    /// Point lookup by identity. `None` when no such item exists.
    fn item(&self, id: ItemId) -> Option<ChecklistItem>;

    /// All items in display order.
    fn all_items(&self) -> Vec<ChecklistItem>;

    /// Overwrites the stored item carrying the same identity.
    fn update_item(&self, item: &ChecklistItem);

    /// Appends a new item with a freshly assigned identity.
    fn add_item(&self, description: &str);

    fn delete_item(&self, id: ItemId);

    /// Toggles one item's completion flag.
    fn flip_status(&self, id: ItemId);

    /// Deletes every checked item.
    fn delete_checked(&self);

    fn check_all(&self);

    fn uncheck_all(&self);

    /// Inverts every item's completion flag.
    fn flip_all(&self);
}

/// Dispatches store mutations on the background queue, fire-and-forget.
///
/// The queue is injected rather than reached through ambient global state, so hosts and tests
/// control exactly where storage work runs. Callers refresh the displayed list afterwards via
/// [`crate::fetch_all_items`]; completion of an individual mutation is not observable here.
pub struct StoreCommands {
    store: Arc<dyn ItemStore>,
    queue: Arc<dyn TaskQueue>,
}

impl StoreCommands {
    pub fn new(store: Arc<dyn ItemStore>, queue: Arc<dyn TaskQueue>) -> Self {
        Self { store, queue }
    }

    pub fn update_item(&self, item: ChecklistItem) {
        self.dispatch(move |store| store.update_item(&item));
    }

    pub fn add_item(&self, description: impl Into<String>) {
        let description = description.into();
        self.dispatch(move |store| store.add_item(&description));
    }

    pub fn delete_item(&self, id: ItemId) {
        self.dispatch(move |store| store.delete_item(id));
    }

    pub fn flip_status(&self, id: ItemId) {
        self.dispatch(move |store| store.flip_status(id));
    }

    pub fn delete_checked(&self) {
        self.dispatch(|store| store.delete_checked());
    }

    pub fn check_all(&self) {
        self.dispatch(|store| store.check_all());
    }

    pub fn uncheck_all(&self) {
        self.dispatch(|store| store.uncheck_all());
    }

    pub fn flip_all(&self) {
        self.dispatch(|store| store.flip_all());
    }

    fn dispatch(&self, op: impl FnOnce(&dyn ItemStore) + Send + 'static) {
        let store = Arc::clone(&self.store);
        self.queue.dispatch(Box::new(move || op(&*store)));
    }
}
