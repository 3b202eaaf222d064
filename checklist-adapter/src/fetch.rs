use std::sync::Arc;

use checklist::{ChecklistItem, ItemId};
use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

use crate::store::ItemStore;
use crate::worker::TaskQueue;

/// The receiving half of a single-value hand-off from a background task to the UI thread.
///
/// Poll it from the UI-affinity thread; at most one value is ever delivered. Dropping the handle
/// disposes the observation: a result arriving afterwards is discarded instead of reaching a
/// consumer that no longer exists.
pub struct PendingFetch<T> {
    rx: Receiver<T>,
}

impl<T> PendingFetch<T> {
    /// Creates a connected delivery/fetch pair.
    pub fn channel() -> (FetchDelivery<T>, PendingFetch<T>) {
        let (tx, rx) = bounded(1);
        (FetchDelivery { tx }, PendingFetch { rx })
    }

    /// Takes the delivered value, if one has arrived.
    ///
    /// Returns `None` while the fetch is still in flight, after the single value has been taken,
    /// and when the delivery side was dropped without delivering.
    pub fn poll(&mut self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// The delivering half of a [`PendingFetch`] pair. Consumed by delivery.
pub struct FetchDelivery<T> {
    tx: Sender<T>,
}

impl<T> FetchDelivery<T> {
    /// Delivers the value. A no-op when the fetch was already disposed.
    pub fn deliver(self, value: T) {
        if self.tx.send(value).is_err() {
            ctrace!("fetch disposed before delivery; result dropped");
        }
    }
}

/// Asynchronous point lookup by identity.
///
/// The read runs on `queue`; the result (or `None` for a vanished item) is delivered at most
/// once through the returned handle.
pub fn fetch_item(
    store: &Arc<dyn ItemStore>,
    queue: &dyn TaskQueue,
    id: ItemId,
) -> PendingFetch<Option<ChecklistItem>> {
    let (delivery, fetch) = PendingFetch::channel();
    let store = Arc::clone(store);
    queue.dispatch(Box::new(move || delivery.deliver(store.item(id))));
    fetch
}

/// Fetches the full item list in display order.
///
/// This feeds [`crate::ListController::submit_list`]: run it after any mutation, poll the handle
/// on the UI thread, and submit the delivered snapshot.
pub fn fetch_all_items(
    store: &Arc<dyn ItemStore>,
    queue: &dyn TaskQueue,
) -> PendingFetch<Vec<ChecklistItem>> {
    let (delivery, fetch) = PendingFetch::channel();
    let store = Arc::clone(store);
    queue.dispatch(Box::new(move || delivery.deliver(store.all_items())));
    fetch
}
