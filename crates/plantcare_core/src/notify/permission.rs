//! Notification permission states.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authorization status as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAuthorization {
    /// The user has not been asked yet.
    NotDetermined,
    Denied,
    Authorized,
    /// Quiet delivery granted without an explicit prompt.
    Provisional,
}

/// Host string value for an undetermined status.
pub const HOST_AUTHORIZATION_NOT_DETERMINED: &str = "not_determined";
/// Host string value for a denied status.
pub const HOST_AUTHORIZATION_DENIED: &str = "denied";
/// Host string value for an authorized status.
pub const HOST_AUTHORIZATION_AUTHORIZED: &str = "authorized";
/// Host string value for a provisional status.
pub const HOST_AUTHORIZATION_PROVISIONAL: &str = "provisional";

impl HostAuthorization {
    /// Stable string id used at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotDetermined => HOST_AUTHORIZATION_NOT_DETERMINED,
            Self::Denied => HOST_AUTHORIZATION_DENIED,
            Self::Authorized => HOST_AUTHORIZATION_AUTHORIZED,
            Self::Provisional => HOST_AUTHORIZATION_PROVISIONAL,
        }
    }

    /// Whether alerts may be delivered under this status.
    pub fn allows_alerts(self) -> bool {
        matches!(self, Self::Authorized | Self::Provisional)
    }
}

/// Parses one host authorization status from its string id.
pub fn parse_host_authorization(value: &str) -> Result<HostAuthorization, PermissionParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(PermissionParseError::EmptyStatus);
    }

    match normalized {
        HOST_AUTHORIZATION_NOT_DETERMINED => Ok(HostAuthorization::NotDetermined),
        HOST_AUTHORIZATION_DENIED => Ok(HostAuthorization::Denied),
        HOST_AUTHORIZATION_AUTHORIZED => Ok(HostAuthorization::Authorized),
        HOST_AUTHORIZATION_PROVISIONAL => Ok(HostAuthorization::Provisional),
        other => Err(PermissionParseError::UnsupportedStatus(other.to_string())),
    }
}

/// Host authorization parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionParseError {
    EmptyStatus,
    UnsupportedStatus(String),
}

impl Display for PermissionParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStatus => write!(f, "authorization status must not be empty"),
            Self::UnsupportedStatus(value) => {
                write!(f, "authorization status is unsupported: {value}")
            }
        }
    }
}

impl Error for PermissionParseError {}

/// Scheduler-side permission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PermissionState {
    /// Not yet determined; the next schedule call resolves it.
    #[default]
    Unknown,
    /// Authorized, including provisional delivery.
    Authorized,
    Denied,
}

impl PermissionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Authorized => "authorized",
            Self::Denied => "denied",
        }
    }
}

impl From<HostAuthorization> for PermissionState {
    fn from(value: HostAuthorization) -> Self {
        match value {
            HostAuthorization::NotDetermined => Self::Unknown,
            HostAuthorization::Denied => Self::Denied,
            HostAuthorization::Authorized | HostAuthorization::Provisional => Self::Authorized,
        }
    }
}
