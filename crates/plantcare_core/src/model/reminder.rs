//! Reminder item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one tracked plant-watering entry.
//! - Generate stable identity at creation time.
//!
//! # Invariants
//! - `id` is generated once and never reused for another reminder.
//! - `is_checked` starts as `false`.
//! - Label fields (`light`, `watering_days`, `water_amount`) are stored
//!   opaquely; the closed option sets live in `model::draft`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one reminder item.
pub type ReminderId = Uuid;

/// One plant-watering reminder shown in the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderItem {
    /// Stable ID used by every store lookup and mutation.
    pub id: ReminderId,
    /// Display name. Validated by the draft layer, not here.
    pub name: String,
    /// Free-text room label, e.g. `in Bedroom`.
    pub location: String,
    /// Whether the plant has been watered in the current round.
    pub is_checked: bool,
    /// Light exposure label, e.g. `Full Sun`.
    pub light: String,
    /// Watering frequency label, e.g. `Every Day`.
    pub watering_days: String,
    /// Water amount label, e.g. `20–50 ml`.
    pub water_amount: String,
}

impl ReminderItem {
    /// Creates an unchecked reminder with a freshly generated ID.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        light: impl Into<String>,
        watering_days: impl Into<String>,
        water_amount: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            name,
            location,
            light,
            watering_days,
            water_amount,
        )
    }

    /// Creates an unchecked reminder with a caller-provided ID.
    ///
    /// Used when identity already exists outside the core (e.g. a host app
    /// re-hydrating its own list). Callers own uniqueness of `id`.
    pub fn with_id(
        id: ReminderId,
        name: impl Into<String>,
        location: impl Into<String>,
        light: impl Into<String>,
        watering_days: impl Into<String>,
        water_amount: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            is_checked: false,
            light: light.into(),
            watering_days: watering_days.into(),
            water_amount: water_amount.into(),
        }
    }

    /// Flips the checked flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_checked = !self.is_checked;
        self.is_checked
    }
}
