// Example: the rename-dialog flow against an in-memory store and a real worker thread.
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use checklist::{ChecklistItem, ItemId};
use checklist_adapter::{EditSession, ItemStore, SessionState, TextInput, WorkerThread};

struct DemoStore {
    items: Mutex<Vec<ChecklistItem>>,
}

impl ItemStore for DemoStore {
    fn item(&self, id: ItemId) -> Option<ChecklistItem> {
        self.items.lock().unwrap().iter().find(|it| it.id == id).cloned()
    }

    fn all_items(&self) -> Vec<ChecklistItem> {
        self.items.lock().unwrap().clone()
    }

    fn update_item(&self, item: &ChecklistItem) {
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
        if let Some(it) = self.items.lock().unwrap().iter_mut().find(|it| it.id == id) {
            it.checked = !it.checked;
        }
    }

    fn delete_checked(&self) {
        self.items.lock().unwrap().retain(|it| !it.checked);
    }

    fn check_all(&self) {
        self.items.lock().unwrap().iter_mut().for_each(|it| it.checked = true);
    }

    fn uncheck_all(&self) {
        self.items.lock().unwrap().iter_mut().for_each(|it| it.checked = false);
    }

    fn flip_all(&self) {
        self.items
            .lock()
            .unwrap()
            .iter_mut()
            .for_each(|it| it.checked = !it.checked);
    }
}

#[derive(Default)]
struct DemoInput {
    value: Option<String>,
}

impl TextInput for DemoInput {
    fn text(&self) -> Option<String> {
        self.value.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.value = Some(text.to_owned());
    }
}

fn main() {
    let store = Arc::new(DemoStore {
        items: Mutex::new(vec![ChecklistItem::new(1, "Milk", false)]),
    });
    let worker = Arc::new(WorkerThread::new());

    let mut input = DemoInput::default();
    let mut session = EditSession::new(1, store.clone() as _, worker.clone() as _);
    session.open();

    // The host UI would poll on its frame ticks; here we just spin until the fetch lands.
    while session.state() == SessionState::Loading {
        session.poll(&mut input);
        thread::sleep(Duration::from_millis(1));
    }
    println!("loaded: field = {:?}", input.value);

    input.set_text("Oat milk");
    session.confirm(&input);
    session.close();

    // Dropping the worker drains the dispatched write before the final read below.
    drop(session);
    drop(worker);
    println!("stored: {:?}", store.all_items());
}
