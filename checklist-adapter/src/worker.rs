use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, unbounded};

/// A unit of background work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An injectable background execution context for storage work.
///
/// Storage reads and writes must never run on the UI-affinity thread; the controller helpers and
/// the edit session dispatch them here instead. Implementations decide the concurrency level; a
/// single serial queue is sufficient for this crate's contracts.
pub trait TaskQueue: Send + Sync {
    fn dispatch(&self, task: Task);
}

/// A single background worker thread draining tasks in FIFO order.
///
/// This is the provided [`TaskQueue`] implementation: one serial queue for all storage
/// operations, owned by whoever constructs it and passed down explicitly. Dropping the handle
/// closes the queue, lets the worker drain what was already dispatched, and joins it.
pub struct WorkerThread {
    tx: Option<Sender<Task>>,
    handle: Option<JoinHandle<()>>,
}

impl WorkerThread {
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<Task>();
        let handle = thread::spawn(move || {
            while let Ok(task) = rx.recv() {
                task();
            }
        });
        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }
}

impl Default for WorkerThread {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskQueue for WorkerThread {
    fn dispatch(&self, task: Task) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(task).is_err() {
            cwarn!("task dispatched to a stopped worker; dropping it");
        }
    }
}

impl Drop for WorkerThread {
    fn drop(&mut self) {
        // Closing the channel ends the drain loop once already-dispatched tasks finish.
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
