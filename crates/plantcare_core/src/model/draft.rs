//! Reminder draft and picker option catalogs.
//!
//! # Responsibility
//! - Hold the add-sheet form state with its default selections.
//! - Validate the plant name before anything reaches the store.
//! - Expose closed option sets with stable display labels.
//!
//! # Invariants
//! - `build()` never yields an item with an empty (trimmed) name.
//! - Labels are stable strings; the store keeps them opaquely.

use crate::model::reminder::ReminderItem;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Room where the plant lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Room {
    #[default]
    Bedroom,
    LivingRoom,
    Balcony,
    Kitchen,
    Bathroom,
}

impl Room {
    /// Stable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bedroom => "Bedroom",
            Self::LivingRoom => "Living Room",
            Self::Balcony => "Balcony",
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
        }
    }

    /// All options in picker order.
    pub fn all() -> &'static [Room] {
        &[
            Self::Bedroom,
            Self::LivingRoom,
            Self::Balcony,
            Self::Kitchen,
            Self::Bathroom,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        parse_label(Self::all(), Self::label, value)
    }
}

/// Light exposure at the plant's spot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LightExposure {
    #[default]
    FullSun,
    PartialShade,
    LowLight,
}

impl LightExposure {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullSun => "Full Sun",
            Self::PartialShade => "Partial Shade",
            Self::LowLight => "Low Light",
        }
    }

    pub fn all() -> &'static [LightExposure] {
        &[Self::FullSun, Self::PartialShade, Self::LowLight]
    }

    pub fn parse(value: &str) -> Option<Self> {
        parse_label(Self::all(), Self::label, value)
    }
}

/// How often the plant should be watered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WateringFrequency {
    #[default]
    EveryDay,
    Every2Days,
    Every3Days,
    OnceAWeek,
    Every10Days,
    Every2Weeks,
}

impl WateringFrequency {
    pub fn label(self) -> &'static str {
        match self {
            Self::EveryDay => "Every Day",
            Self::Every2Days => "Every 2 Days",
            Self::Every3Days => "Every 3 Days",
            Self::OnceAWeek => "Once a week",
            Self::Every10Days => "Every 10 Days",
            Self::Every2Weeks => "Every 2 weeks",
        }
    }

    pub fn all() -> &'static [WateringFrequency] {
        &[
            Self::EveryDay,
            Self::Every2Days,
            Self::Every3Days,
            Self::OnceAWeek,
            Self::Every10Days,
            Self::Every2Weeks,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        parse_label(Self::all(), Self::label, value)
    }
}

/// Water amount per watering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WaterAmount {
    #[default]
    Ml20To50,
    Ml50To100,
    Ml100To200,
    Ml200To300,
}

impl WaterAmount {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ml20To50 => "20–50 ml",
            Self::Ml50To100 => "50–100 ml",
            Self::Ml100To200 => "100–200 ml",
            Self::Ml200To300 => "200–300 ml",
        }
    }

    pub fn all() -> &'static [WaterAmount] {
        &[
            Self::Ml20To50,
            Self::Ml50To100,
            Self::Ml100To200,
            Self::Ml200To300,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        parse_label(Self::all(), Self::label, value)
    }
}

fn parse_label<T: Copy>(options: &[T], label: fn(T) -> &'static str, value: &str) -> Option<T> {
    let normalized = value.trim();
    options
        .iter()
        .copied()
        .find(|option| label(*option) == normalized)
}

/// Draft validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Plant name is empty after trimming whitespace and newlines.
    EmptyName,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "plant name must not be empty"),
        }
    }
}

impl Error for DraftError {}

/// Add-sheet form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    pub name: String,
    pub room: Room,
    pub light: LightExposure,
    pub watering: WateringFrequency,
    pub water_amount: WaterAmount,
}

impl ReminderDraft {
    /// Starts a draft with the given name and default selections.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Restores the empty name and default selections.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds an unchecked reminder item from this draft.
    ///
    /// # Errors
    /// - `DraftError::EmptyName` when the trimmed name is empty.
    pub fn build(&self) -> Result<ReminderItem, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        Ok(ReminderItem::new(
            name,
            format!("in {}", self.room.label()),
            self.light.label(),
            self.watering.label(),
            self.water_amount.label(),
        ))
    }
}
