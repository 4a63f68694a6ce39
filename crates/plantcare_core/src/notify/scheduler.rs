//! One-shot water reminder scheduler.
//!
//! # Responsibility
//! - Resolve notification permission lazily on first use.
//! - Arm one uniquely identified, non-repeating alert per call.
//!
//! # Invariants
//! - `Unknown` triggers exactly one host round-trip; concurrent first calls
//!   wait on the same resolution instead of prompting twice.
//! - `Denied` drops requests without contacting the host.
//! - Calls never cancel or coalesce with each other.

use crate::config::ReminderConfig;
use crate::notify::host::{AlertId, AlertRequest, NotificationHost};
use crate::notify::permission::{HostAuthorization, PermissionState};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::Mutex;

/// Permission-gated, fire-and-forget reminder scheduler.
pub struct NotificationScheduler<H: NotificationHost> {
    host: Arc<H>,
    runtime: Handle,
    config: Arc<ReminderConfig>,
    permission: Arc<Mutex<PermissionState>>,
}

impl<H: NotificationHost> Clone for NotificationScheduler<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            runtime: self.runtime.clone(),
            config: Arc::clone(&self.config),
            permission: Arc::clone(&self.permission),
        }
    }
}

impl<H: NotificationHost> NotificationScheduler<H> {
    /// Creates a scheduler that spawns its work on `runtime`.
    pub fn new(host: Arc<H>, runtime: Handle, config: ReminderConfig) -> Self {
        Self {
            host,
            runtime,
            config: Arc::new(config),
            permission: Arc::new(Mutex::new(PermissionState::Unknown)),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    /// Arms a water reminder `delay` from now, without waiting.
    ///
    /// Permission resolution and registration happen on the runtime; the
    /// caller gets no completion signal.
    pub fn schedule_water_reminder(&self, delay: Duration) {
        let scheduler = self.clone();
        // Detached: the join handle is dropped on purpose.
        drop(self.runtime.spawn(async move {
            scheduler.arm_water_reminder(delay).await;
        }));
    }

    /// Resolves permission, then registers one alert.
    ///
    /// Returns the armed alert ID, or `None` when permission is denied.
    pub async fn arm_water_reminder(&self, delay: Duration) -> Option<AlertId> {
        if !self.ensure_permission().await {
            info!("event=alert_dropped module=notify status=denied");
            return None;
        }

        let request = AlertRequest::water_reminder(&self.config, delay);
        let alert_id = request.id.clone();
        let fire_after_ms = request.fire_after.as_millis();
        self.host.register(request).await;
        info!(
            "event=alert_armed module=notify status=ok alert_id={} fire_after_ms={}",
            alert_id, fire_after_ms
        );
        Some(alert_id)
    }

    /// Current cached permission state.
    pub async fn permission_state(&self) -> PermissionState {
        *self.permission.lock().await
    }

    /// Re-reads the host status without prompting.
    ///
    /// Lets callers pick up a settings change made outside the app.
    pub async fn refresh_permission(&self) -> PermissionState {
        let mut state = self.permission.lock().await;
        let status = self.host.authorization_status().await;
        *state = PermissionState::from(status);
        info!(
            "event=permission_resolved module=notify status=ok source=refresh state={}",
            state.as_str()
        );
        *state
    }

    async fn ensure_permission(&self) -> bool {
        let mut state = self.permission.lock().await;
        if *state == PermissionState::Unknown {
            *state = match self.host.authorization_status().await {
                HostAuthorization::NotDetermined => {
                    if self.host.request_authorization().await {
                        PermissionState::Authorized
                    } else {
                        PermissionState::Denied
                    }
                }
                other => PermissionState::from(other),
            };

            if *state == PermissionState::Denied {
                warn!("event=permission_resolved module=notify status=denied");
            } else {
                info!(
                    "event=permission_resolved module=notify status=ok state={}",
                    state.as_str()
                );
            }
        }
        *state == PermissionState::Authorized
    }
}
