//! Completion policy over reminder snapshots.
//!
//! # Responsibility
//! - Derive progress percentage and status category from a snapshot.
//! - Detect the `false -> true` transition of "every reminder checked".
//!
//! # Invariants
//! - Percentage is always within `0.0..=100.0`; empty input yields `0.0`.
//! - Status precedence: waiting, single-checked, all-done, partial.
//! - The tracker compares only against its immediately preceding
//!   observation, so every fresh completion fires exactly once.

use crate::model::reminder::ReminderItem;
use log::info;

/// Categorical status shown above the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Nothing checked yet (or the list is empty).
    Waiting,
    /// Exactly one reminder checked.
    SingleChecked,
    /// Every reminder checked.
    AllDone,
    /// Some, but not all, reminders checked.
    Partial { checked: usize },
}

impl StatusMessage {
    /// Default English copy for this status.
    ///
    /// Presentation layers may map categories to their own strings.
    pub fn default_text(self) -> String {
        match self {
            Self::Waiting => "Your plants are waiting for a sip 💦".to_string(),
            Self::SingleChecked => "1 of your plants feels loved today ✨".to_string(),
            Self::AllDone => "All your plants are happy today 🌸".to_string(),
            Self::Partial { checked } => format!("{checked} of your plants feel loved today ✨"),
        }
    }

    /// Stable category id, used at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::SingleChecked => "single_checked",
            Self::AllDone => "all_done",
            Self::Partial { .. } => "partial",
        }
    }
}

fn checked_count(items: &[ReminderItem]) -> usize {
    items.iter().filter(|item| item.is_checked).count()
}

/// Returns the checked share of `items` as a percentage.
pub fn percent_complete(items: &[ReminderItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    checked_count(items) as f64 / items.len() as f64 * 100.0
}

/// Returns the status category for `items`.
pub fn status_message(items: &[ReminderItem]) -> StatusMessage {
    let checked = checked_count(items);
    if items.is_empty() || checked == 0 {
        return StatusMessage::Waiting;
    }
    if checked == 1 {
        return StatusMessage::SingleChecked;
    }
    if checked == items.len() {
        return StatusMessage::AllDone;
    }
    StatusMessage::Partial { checked }
}

/// Returns whether `items` is non-empty and fully checked.
pub fn is_all_done(items: &[ReminderItem]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.is_checked)
}

/// Derived view of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSnapshot {
    pub percent: f64,
    pub status: StatusMessage,
    pub all_done: bool,
    /// `true` only on the observation where `all_done` flipped to `true`.
    pub just_completed: bool,
}

/// Edge detector for the "all done" transition.
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    was_all_done: bool,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking from an existing snapshot without firing for it.
    pub fn primed(items: &[ReminderItem]) -> Self {
        Self {
            was_all_done: is_all_done(items),
        }
    }

    /// Evaluates `items` against the previous observation.
    pub fn observe(&mut self, items: &[ReminderItem]) -> CompletionSnapshot {
        let all_done = is_all_done(items);
        let just_completed = all_done && !self.was_all_done;
        self.was_all_done = all_done;

        if just_completed {
            info!(
                "event=completion_edge module=policy status=ok count={}",
                items.len()
            );
        }

        CompletionSnapshot {
            percent: percent_complete(items),
            status: status_message(items),
            all_done,
            just_completed,
        }
    }

    /// Last observed "all done" value.
    pub fn is_all_done(&self) -> bool {
        self.was_all_done
    }
}
