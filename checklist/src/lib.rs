//! A headless checklist-list model with minimal edit-script reconciliation.
//!
//! For adapter-level utilities (list controller, edit session, storage seams), see the
//! `checklist-adapter` crate.
//!
//! This crate focuses on the core algorithm needed to update a rendered list smoothly: given the
//! sequence currently on screen and a fresh snapshot from storage, compute the smallest set of
//! row removals, insertions, and content changes that transforms one into the other, aligned by
//! stable item identity.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the currently rendered sequence and each incoming snapshot
//! - a row surface that can insert, remove, and rebind rows by position
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod diff;
mod key;
mod types;


pub use diff::compute_edit_script;
pub use key::{DiffItem, DiffKey};
pub use types::{ChecklistItem, ItemId, RowEdit};
