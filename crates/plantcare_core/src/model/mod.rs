//! Reminder domain model.
//!
//! # Responsibility
//! - Define the reminder record shared by store, policy and FFI layers.
//! - Define add-sheet draft input and its closed option catalogs.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - Only drafts validate names; the store accepts any well-formed item.

pub mod draft;
pub mod reminder;
