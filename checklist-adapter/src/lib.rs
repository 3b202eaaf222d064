//! Adapter utilities for the `checklist` crate.
//!
//! The `checklist` crate is UI-agnostic and focuses on the item model and edit-script
//! computation. This crate provides the framework-neutral pieces a row-based UI needs around it:
//!
//! - a list controller that patches a row surface from successive storage snapshots
//! - the rename-dialog session (asynchronous fetch, edit, fire-and-forget write-back)
//! - collaborator seams for storage, row surfaces, text input, and background work
//!
//! This crate is intentionally framework-agnostic (no widget-toolkit bindings). Hosts implement
//! [`RowSurface`] and [`TextInput`] over their widgets and [`ItemStore`] over their persistence.
//!
//! # Threading
//!
//! The controller and session are UI-thread-affine: drive them from the single thread that owns
//! the UI. Storage reads and writes run on an injected [`TaskQueue`]; results come back through
//! [`PendingFetch`] handles that are polled on the UI thread, so delivery never happens on the
//! background context.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod fetch;
mod session;
mod store;
mod surface;
mod worker;

#[cfg(test)]
mod tests;

pub use controller::{ListController, RowClickHandler};
pub use fetch::{FetchDelivery, PendingFetch, fetch_all_items, fetch_item};
pub use session::{EditSession, SessionState};
pub use store::{ItemStore, StoreCommands};
pub use surface::{RowSurface, TextInput};
pub use worker::{Task, TaskQueue, WorkerThread};
