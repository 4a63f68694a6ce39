//! In-memory reminder storage.
//!
//! # Responsibility
//! - Own the ordered reminder collection for the process lifetime.
//! - Notify subscribers synchronously after every effective mutation.
//!
//! # Invariants
//! - Only the store API mutates the collection; readers get copies.
//! - Not-found IDs are no-ops, never errors.

pub mod reminder_store;
