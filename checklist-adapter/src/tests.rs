use crate::*;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use checklist::{ChecklistItem, ItemId};

fn item(id: ItemId, description: &str, checked: bool) -> ChecklistItem {
    ChecklistItem::new(id, description, checked)
}

/// A recording row surface. Each inserted row gets a fresh serial, so tests can tell "the same
/// row element, rebound" apart from "a rebuilt row".
#[derive(Default)]
struct TestSurface {
    rows: Vec<(u64, ChecklistItem)>,
    next_serial: u64,
    touched: usize,
}

impl TestSurface {
    fn items(&self) -> Vec<ChecklistItem> {
        self.rows.iter().map(|(_, item)| item.clone()).collect()
    }

    fn serials(&self) -> Vec<u64> {
        self.rows.iter().map(|(serial, _)| *serial).collect()
    }
}

impl RowSurface for TestSurface {
    fn insert_row(&mut self, position: usize, item: &ChecklistItem) {
        self.next_serial += 1;
        self.rows.insert(position, (self.next_serial, item.clone()));
        self.touched += 1;
    }

    fn remove_row(&mut self, position: usize) {
        self.rows.remove(position);
        self.touched += 1;
    }

    fn update_row(&mut self, position: usize, item: &ChecklistItem) {
        self.rows[position].1 = item.clone();
        self.touched += 1;
    }
}

#[derive(Default)]
struct FakeInput {
    value: Option<String>,
}

impl TextInput for FakeInput {
    fn text(&self) -> Option<String> {
        self.value.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.value = Some(text.to_owned());
    }
}

/// An in-memory store that records every `update_item` call.
#[derive(Default)]
struct MemoryStore {
    items: Mutex<Vec<ChecklistItem>>,
    updates: Mutex<Vec<ChecklistItem>>,
}

impl MemoryStore {
    fn with_items(items: Vec<ChecklistItem>) -> Arc<Self> {
        let store = Self::default();
        *store.items.lock().unwrap() = items;
        Arc::new(store)
    }

    fn snapshot(&self) -> Vec<ChecklistItem> {
        self.items.lock().unwrap().clone()
    }

    fn update_log(&self) -> Vec<ChecklistItem> {
        self.updates.lock().unwrap().clone()
    }
}

impl ItemStore for MemoryStore {
    fn item(&self, id: ItemId) -> Option<ChecklistItem> {
        self.items.lock().unwrap().iter().find(|it| it.id == id).cloned()
    }

    fn all_items(&self) -> Vec<ChecklistItem> {
        self.snapshot()
    }

    fn update_item(&self, item: &ChecklistItem) {
        self.updates.lock().unwrap().push(item.clone());
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|it| it.id == item.id) {
            *slot = item.clone();
        }
    }

    fn add_item(&self, description: &str) {
        let mut items = self.items.lock().unwrap();
        let id = items.iter().map(|it| it.id).max().unwrap_or(0) + 1;
        items.push(ChecklistItem::new(id, description, false));
    }

    fn delete_item(&self, id: ItemId) {
        self.items.lock().unwrap().retain(|it| it.id != id);
    }

    fn flip_status(&self, id: ItemId) {
        let mut items = self.items.lock().unwrap();
        if let Some(it) = items.iter_mut().find(|it| it.id == id) {
            it.checked = !it.checked;
        }
    }

    fn delete_checked(&self) {
        self.items.lock().unwrap().retain(|it| !it.checked);
    }

    fn check_all(&self) {
        for it in self.items.lock().unwrap().iter_mut() {
            it.checked = true;
        }
    }

    fn uncheck_all(&self) {
        for it in self.items.lock().unwrap().iter_mut() {
            it.checked = false;
        }
    }

    fn flip_all(&self) {
        for it in self.items.lock().unwrap().iter_mut() {
            it.checked = !it.checked;
        }
    }
}

/// Runs tasks inline, collapsing the background hop for deterministic tests.
struct InlineQueue;

impl TaskQueue for InlineQueue {
    fn dispatch(&self, task: Task) {
        task();
    }
}

/// Holds tasks until the test releases them, to observe in-flight states.
#[derive(Default)]
struct HeldQueue {
    tasks: Mutex<Vec<Task>>,
}

impl HeldQueue {
    fn run_all(&self) {
        let tasks: Vec<Task> = std::mem::take(&mut *self.tasks.lock().unwrap());
        for task in tasks {
            task();
        }
    }

    fn pending(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

impl TaskQueue for HeldQueue {
    fn dispatch(&self, task: Task) {
        self.tasks.lock().unwrap().push(task);
    }
}

#[test]
fn controller_builds_rows_from_an_empty_surface() {
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(1, "Milk", false), item(2, "Eggs", true)]);

    assert_eq!(controller.surface().items(), controller.displayed());
    assert_eq!(controller.surface().serials(), [1, 2]);
}

#[test]
fn resubmitting_an_identical_list_touches_no_rows() {
    let list = vec![item(1, "Milk", false), item(2, "Eggs", true)];
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(list.clone());

    let touched_before = controller.surface().touched;
    let serials_before = controller.surface().serials();
    controller.submit_list(list);

    assert_eq!(controller.surface().touched, touched_before);
    assert_eq!(controller.surface().serials(), serials_before);
}

#[test]
fn content_change_rebinds_the_row_in_place() {
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(1, "Milk", false)]);
    let serial = controller.surface().serials()[0];

    controller.submit_list(vec![item(1, "Oat milk", false)]);

    assert_eq!(controller.surface().serials(), [serial]);
    assert_eq!(
        controller.surface().items()[0].description_or_empty(),
        "Oat milk"
    );
}

#[test]
fn surviving_row_keeps_its_element_across_removal_and_insertion() {
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(1, "Milk", false), item(2, "Eggs", true)]);
    let eggs_serial = controller.surface().serials()[1];

    controller.submit_list(vec![item(2, "Eggs", true), item(3, "Bread", false)]);

    assert_eq!(controller.surface().items(), controller.displayed());
    // The Eggs row element survived; Bread got a fresh one.
    assert_eq!(controller.surface().serials()[0], eggs_serial);
    assert_ne!(controller.surface().serials()[1], eggs_serial);
}

#[test]
fn surface_tracks_reorders() {
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(1, "Milk", false), item(2, "Eggs", true)]);
    controller.submit_list(vec![item(2, "Eggs", true), item(1, "Milk", false)]);

    assert_eq!(controller.surface().items(), controller.displayed());
    assert_eq!(controller.row_identity(0), 2);
    assert_eq!(controller.row_identity(1), 1);
}

#[test]
fn row_identity_is_stable_across_snapshots() {
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(7, "Milk", false)]);
    let before = controller.row_identity(0);

    controller.submit_list(vec![item(7, "Whole milk", true)]);

    assert_eq!(controller.row_identity(0), before);
}

#[test]
#[should_panic]
fn resolving_an_unbound_row_panics() {
    let controller = ListController::new(TestSurface::default());
    let _ = controller.row_identity(0);
}

#[test]
fn click_dispatches_row_index_and_identity() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(4, "Milk", false), item(9, "Eggs", true)]);

    let sink = Arc::clone(&seen);
    controller.set_on_row_click(Some(move |row, id| sink.lock().unwrap().push((row, id))));
    controller.click(1);
    controller.click(0);

    assert_eq!(*seen.lock().unwrap(), [(1, 9), (0, 4)]);
}

#[test]
fn long_click_is_consumed_only_when_handled() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut controller = ListController::new(TestSurface::default());
    controller.submit_list(vec![item(4, "Milk", false)]);

    assert!(!controller.long_click(0));

    let sink = Arc::clone(&seen);
    controller.set_on_row_long_click(Some(move |row, id| sink.lock().unwrap().push((row, id))));
    assert!(controller.long_click(0));
    assert_eq!(*seen.lock().unwrap(), [(0, 4)]);
}

#[test]
fn worker_thread_runs_tasks_in_fifo_order() {
    let worker = WorkerThread::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    for i in 0..3 {
        let log = Arc::clone(&log);
        worker.dispatch(Box::new(move || log.lock().unwrap().push(i)));
    }

    let (tx, rx) = crossbeam_channel::bounded(1);
    worker.dispatch(Box::new(move || {
        let _ = tx.send(());
    }));
    rx.recv_timeout(Duration::from_secs(5)).unwrap();

    assert_eq!(*log.lock().unwrap(), [0, 1, 2]);
}

#[test]
fn dropping_the_worker_drains_dispatched_tasks() {
    let counter = Arc::new(Mutex::new(0));
    let worker = WorkerThread::new();
    for _ in 0..10 {
        let counter = Arc::clone(&counter);
        worker.dispatch(Box::new(move || *counter.lock().unwrap() += 1));
    }
    drop(worker);

    assert_eq!(*counter.lock().unwrap(), 10);
}

#[test]
fn fetch_all_items_delivers_a_single_snapshot() {
    let store = MemoryStore::with_items(vec![item(1, "Milk", false)]);
    let dyn_store: Arc<dyn ItemStore> = store;
    let queue = HeldQueue::default();

    let mut fetch = fetch_all_items(&dyn_store, &queue);
    assert_eq!(fetch.poll(), None);

    queue.run_all();
    assert_eq!(fetch.poll(), Some(vec![item(1, "Milk", false)]));
    assert_eq!(fetch.poll(), None);
}

#[test]
fn disposed_fetch_drops_a_late_result() {
    let store = MemoryStore::with_items(vec![item(1, "Milk", false)]);
    let dyn_store: Arc<dyn ItemStore> = store;
    let queue = HeldQueue::default();

    let fetch = fetch_item(&dyn_store, &queue, 1);
    drop(fetch);

    // The read still runs; its delivery must be a silent no-op.
    assert_eq!(queue.pending(), 1);
    queue.run_all();
}

#[test]
fn session_loads_and_fills_the_field() {
    let store = MemoryStore::with_items(vec![item(3, "Eggs", true)]);
    let queue = Arc::new(InlineQueue);
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, store, queue);

    assert_eq!(session.state(), SessionState::Uninitialized);
    session.open();
    session.poll(&mut input);

    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(input.value.as_deref(), Some("Eggs"));
}

#[test]
fn confirm_writes_the_edited_description() {
    let store = MemoryStore::with_items(vec![item(3, "Eggs", true)]);
    let queue = Arc::new(InlineQueue);
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, Arc::clone(&store) as _, queue);

    session.open();
    session.poll(&mut input);
    input.set_text("Eggs (dozen)");
    session.confirm(&input);

    assert_eq!(session.state(), SessionState::Submitting);
    assert_eq!(store.update_log(), [item(3, "Eggs (dozen)", true)]);
    assert_eq!(store.snapshot(), [item(3, "Eggs (dozen)", true)]);
}

#[test]
fn confirm_normalizes_absent_text_to_empty() {
    let store = MemoryStore::with_items(vec![item(3, "Eggs", true)]);
    let queue = Arc::new(InlineQueue);
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, Arc::clone(&store) as _, queue);

    session.open();
    session.poll(&mut input);
    input.value = None;
    session.confirm(&input);

    assert_eq!(store.update_log(), [item(3, "", true)]);
}

#[test]
fn confirm_after_submitting_writes_nothing_more() {
    let store = MemoryStore::with_items(vec![item(3, "Eggs", true)]);
    let queue = Arc::new(InlineQueue);
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, Arc::clone(&store) as _, queue);

    session.open();
    session.poll(&mut input);
    session.confirm(&input);
    session.confirm(&input);

    assert_eq!(store.update_log().len(), 1);
}

#[test]
fn fetch_miss_keeps_the_dialog_empty_and_guards_confirm() {
    // The item was deleted between the tap and the fetch.
    let store = MemoryStore::with_items(Vec::new());
    let queue = Arc::new(InlineQueue);
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, Arc::clone(&store) as _, queue);

    session.open();
    session.poll(&mut input);

    assert_eq!(session.state(), SessionState::Loading);
    assert_eq!(input.value, None);

    session.confirm(&input);
    assert!(store.update_log().is_empty());

    session.close();
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn closing_while_loading_disposes_the_pending_fetch() {
    let store = MemoryStore::with_items(vec![item(3, "Eggs", true)]);
    let queue = Arc::new(HeldQueue::default());
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, Arc::clone(&store) as _, Arc::clone(&queue) as _);

    session.open();
    assert_eq!(session.state(), SessionState::Loading);
    session.close();

    // The fetch completes after dismissal; the dismissed session must not observe it.
    queue.run_all();
    session.poll(&mut input);

    assert_eq!(session.state(), SessionState::Closed);
    assert_eq!(input.value, None);
}

#[test]
fn cancelling_never_writes() {
    let store = MemoryStore::with_items(vec![item(3, "Eggs", true)]);
    let queue = Arc::new(InlineQueue);
    let mut input = FakeInput::default();
    let mut session = EditSession::new(3, Arc::clone(&store) as _, queue);

    session.open();
    session.poll(&mut input);
    input.set_text("discarded edit");
    session.close();

    assert!(store.update_log().is_empty());
    assert_eq!(store.snapshot(), [item(3, "Eggs", true)]);
}

#[test]
fn store_commands_run_on_the_queue_not_the_caller() {
    let store = MemoryStore::with_items(vec![item(1, "Milk", false)]);
    let queue = Arc::new(HeldQueue::default());
    let commands = StoreCommands::new(Arc::clone(&store) as _, Arc::clone(&queue) as _);

    commands.flip_status(1);
    assert_eq!(store.snapshot(), [item(1, "Milk", false)]);

    queue.run_all();
    assert_eq!(store.snapshot(), [item(1, "Milk", true)]);
}

#[test]
fn store_commands_cover_the_whole_list_operations() {
    let store = MemoryStore::with_items(vec![item(1, "Milk", false), item(2, "Eggs", false)]);
    let queue = Arc::new(InlineQueue);
    let commands = StoreCommands::new(Arc::clone(&store) as _, queue);

    commands.check_all();
    assert!(store.snapshot().iter().all(|it| it.checked));

    commands.uncheck_all();
    assert!(store.snapshot().iter().all(|it| !it.checked));

    commands.flip_status(2);
    commands.flip_all();
    assert_eq!(
        store.snapshot(),
        [item(1, "Milk", true), item(2, "Eggs", false)]
    );

    commands.add_item("Bread");
    commands.delete_checked();
    assert_eq!(
        store.snapshot(),
        [item(2, "Eggs", false), item(3, "Bread", false)]
    );

    commands.delete_item(2);
    assert_eq!(store.snapshot(), [item(3, "Bread", false)]);
}

#[test]
fn mutation_fetch_submit_roundtrip_updates_the_surface_in_place() {
    let store = MemoryStore::with_items(vec![item(1, "Milk", false), item(2, "Eggs", false)]);
    let dyn_store: Arc<dyn ItemStore> = Arc::clone(&store) as _;
    let queue = Arc::new(InlineQueue);
    let commands = StoreCommands::new(Arc::clone(&dyn_store), Arc::clone(&queue) as _);

    let mut controller = ListController::new(TestSurface::default());
    let mut fetch = fetch_all_items(&dyn_store, &*queue);
    controller.submit_list(fetch.poll().unwrap());
    let serials = controller.surface().serials();

    commands.flip_status(2);
    let mut fetch = fetch_all_items(&dyn_store, &*queue);
    controller.submit_list(fetch.poll().unwrap());

    // Same row elements, one rebound with the new checked state.
    assert_eq!(controller.surface().serials(), serials);
    assert!(controller.surface().items()[1].checked);
}
