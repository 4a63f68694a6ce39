//! Derived checklist state.
//!
//! Pure functions over a reminder snapshot plus the stateful edge detector
//! that turns "all done" into a one-shot transition signal.

pub mod completion;
