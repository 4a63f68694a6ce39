//! Local notification scheduling.
//!
//! # Responsibility
//! - Model notification permission as a three-state machine.
//! - Arm one-shot "water your plant" alerts through a host seam.
//!
//! # Invariants
//! - Every armed alert has a fresh unique ID and never repeats.
//! - Scheduling never blocks the caller and never reports back.
//! - Permission is prompted at most once per determination.

pub mod host;
pub mod permission;
pub mod scheduler;
