use std::sync::Arc;

use checklist::{ChecklistItem, ItemId};

use crate::fetch::{PendingFetch, fetch_item};
use crate::store::ItemStore;
use crate::surface::TextInput;
use crate::worker::TaskQueue;

/// Lifecycle of the rename dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// Session created with a target identity; nothing fetched yet.
    Uninitialized,
    /// Fetch in flight; the session observes for a single delivered value.
    Loading,
    /// Item arrived and is cached as a mutable local copy; the dialog is editable.
    Loaded,
    /// Write dispatched, fire-and-forget; the dialog is done with the item.
    Submitting,
    /// Dialog dismissed. Cancelling never writes.
    Closed,
}

/// The rename-dialog flow for a single checklist item.
///
/// Loads the item by identity off the UI thread, caches a mutable local copy, and on explicit
/// confirmation writes the edited item back through the store, fire-and-forget. All methods must
/// be called on the UI-affinity thread; background work only ever touches the injected store.
///
/// Hosts drive it as: `open()` when the dialog appears, `poll(input)` on UI ticks while
/// `Loading`, `confirm(input)` on the positive button, `close()` on dismissal (either button).
pub struct EditSession {
    item_id: ItemId,
    store: Arc<dyn ItemStore>,
    queue: Arc<dyn TaskQueue>,
    state: SessionState,
    item: Option<ChecklistItem>,
    pending: Option<PendingFetch<Option<ChecklistItem>>>,
}

impl EditSession {
    /// Creates a session targeting `item_id`. No fetch is issued until [`Self::open`].
    pub fn new(item_id: ItemId, store: Arc<dyn ItemStore>, queue: Arc<dyn TaskQueue>) -> Self {
        Self {
            item_id,
            store,
            queue,
            state: SessionState::Uninitialized,
            item: None,
            pending: None,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Issues the asynchronous point lookup: `Uninitialized` → `Loading`.
    ///
    /// A no-op in any other state; a session observes at most one fetch.
    pub fn open(&mut self) {
        if self.state != SessionState::Uninitialized {
            return;
        }
        ctrace!(item_id = self.item_id, "edit session opened");
        self.pending = Some(fetch_item(&self.store, &*self.queue, self.item_id));
        self.state = SessionState::Loading;
    }

    /// Consumes a delivered fetch result, if one has arrived. Call on UI ticks while `Loading`.
    ///
    /// A delivered item moves the session to `Loaded`, caches the local copy, and pushes its
    /// description into `input`. A fetch miss (the item vanished between tap and fetch) leaves
    /// the session `Loading` with the field unset; nothing is surfaced and nothing can be
    /// written from that state.
    pub fn poll(&mut self, input: &mut dyn TextInput) {
        if self.state != SessionState::Loading {
            return;
        }
        let Some(pending) = &mut self.pending else {
            return;
        };
        match pending.poll() {
            Some(Some(item)) => {
                input.set_text(item.description_or_empty());
                self.item = Some(item);
                self.pending = None;
                self.state = SessionState::Loaded;
            }
            Some(None) => {
                ctrace!(item_id = self.item_id, "edit session fetch miss");
                self.pending = None;
            }
            None => {}
        }
    }

    /// Confirms the edit: `Loaded` → `Submitting`.
    ///
    /// Overwrites the local copy's description with the field text (absent text becomes the
    /// empty string) and dispatches the write on the background queue. Fire-and-forget: the
    /// session does not wait for the write to complete, and the host closes the dialog next.
    ///
    /// In any other state this writes nothing. In particular, confirming while still `Loading`
    /// (slow fetch or fetch miss) must not push a half-initialized item into storage.
    pub fn confirm(&mut self, input: &dyn TextInput) {
        if self.state != SessionState::Loaded {
            return;
        }
        let Some(item) = self.item.as_mut() else {
            return;
        };
        item.description = Some(input.text().unwrap_or_default());
        let updated = item.clone();
        let store = Arc::clone(&self.store);
        self.queue.dispatch(Box::new(move || store.update_item(&updated)));
        self.state = SessionState::Submitting;
    }

    /// Dismisses the dialog, from any state.
    ///
    /// A still-pending fetch is disposed here, so a late-arriving result is dropped instead of
    /// mutating a dismissed session.
    pub fn close(&mut self) {
        if self.pending.take().is_some() {
            ctrace!(item_id = self.item_id, "edit session closed while loading");
        }
        self.state = SessionState::Closed;
    }
}
