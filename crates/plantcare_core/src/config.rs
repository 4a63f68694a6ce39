//! Reminder configuration.
//!
//! # Invariants
//! - Defaults reproduce the shipped app behavior (10 second reminder).
//! - The effective alert delay is never below `MIN_ALERT_DELAY`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay used for the reminder armed after each saved plant.
pub const DEFAULT_REMINDER_DELAY_SECS: u64 = 10;
/// Lower bound applied to every requested alert delay.
pub const MIN_ALERT_DELAY: Duration = Duration::from_secs(1);

const DEFAULT_ALERT_TITLE: &str = "Plant Reminder";
const DEFAULT_ALERT_BODY: &str = "Hey! let's water your plant";
const DEFAULT_ALERT_ID_PREFIX: &str = "water_reminder_";

/// Alert content and timing used by the notification scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    pub default_delay_secs: u64,
    pub alert_title: String,
    pub alert_body: String,
    pub alert_id_prefix: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            default_delay_secs: DEFAULT_REMINDER_DELAY_SECS,
            alert_title: DEFAULT_ALERT_TITLE.to_string(),
            alert_body: DEFAULT_ALERT_BODY.to_string(),
            alert_id_prefix: DEFAULT_ALERT_ID_PREFIX.to_string(),
        }
    }
}

impl ReminderConfig {
    pub fn default_delay(&self) -> Duration {
        Duration::from_secs(self.default_delay_secs)
    }
}

/// Clamps a requested delay to the one-second minimum.
pub fn effective_delay(requested: Duration) -> Duration {
    requested.max(MIN_ALERT_DELAY)
}
