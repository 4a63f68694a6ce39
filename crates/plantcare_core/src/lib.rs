//! Core domain logic for the plant reminder app.
//! This crate is the single source of truth for checklist and reminder
//! invariants; UI layers read and mutate state only through it.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod policy;
pub mod service;
pub mod store;

pub use config::{ReminderConfig, DEFAULT_REMINDER_DELAY_SECS, MIN_ALERT_DELAY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::draft::{
    DraftError, LightExposure, ReminderDraft, Room, WaterAmount, WateringFrequency,
};
pub use model::reminder::{ReminderId, ReminderItem};
pub use notify::host::{
    spawn_one_shot, AlertId, AlertRequest, InProcessAlertHost, NotificationHost,
};
pub use notify::permission::{
    parse_host_authorization, HostAuthorization, PermissionParseError, PermissionState,
};
pub use notify::scheduler::NotificationScheduler;
pub use policy::completion::{
    is_all_done, percent_complete, status_message, CompletionSnapshot, CompletionTracker,
    StatusMessage,
};
pub use service::reminder_service::ReminderService;
pub use store::reminder_store::{ChangeKind, ReminderStore, StoreChange, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
