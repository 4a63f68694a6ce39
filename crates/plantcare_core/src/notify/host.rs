//! Host permission/alert subsystem contract.
//!
//! # Responsibility
//! - Define the async seam between the scheduler and the platform.
//! - Provide a tokio-timer host for CLI runs and tests.
//!
//! # Invariants
//! - `register` is assumed to succeed once authorization is granted.
//! - `InProcessAlertHost` fires each registered alert exactly once.

use crate::config::{effective_delay, ReminderConfig};
use crate::notify::permission::HostAuthorization;
use async_trait::async_trait;
use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Unique identifier of one pending alert.
pub type AlertId = String;

/// One-shot alert registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub id: AlertId,
    pub title: String,
    pub body: String,
    /// Delay from registration to delivery, at least one second.
    pub fire_after: Duration,
    /// Always `false`; alerts are never rescheduled.
    pub repeats: bool,
}

impl AlertRequest {
    /// Builds a water reminder with a freshly generated ID.
    pub fn water_reminder(config: &ReminderConfig, delay: Duration) -> Self {
        Self {
            id: format!("{}{}", config.alert_id_prefix, Uuid::new_v4()),
            title: config.alert_title.clone(),
            body: config.alert_body.clone(),
            fire_after: effective_delay(delay),
            repeats: false,
        }
    }
}

/// Platform permission and local-alert subsystem.
#[async_trait]
pub trait NotificationHost: Send + Sync + 'static {
    /// Reads the current authorization status without prompting.
    async fn authorization_status(&self) -> HostAuthorization;
    /// Prompts the user if undetermined; returns whether alerts are allowed.
    async fn request_authorization(&self) -> bool;
    /// Registers one pending alert.
    async fn register(&self, request: AlertRequest);
}

/// In-process host that fires alerts from tokio timers.
///
/// Fired alerts are delivered on the receiver returned by the constructor.
pub struct InProcessAlertHost {
    status: Mutex<HostAuthorization>,
    grant_on_prompt: bool,
    prompts: AtomicUsize,
    registered: Mutex<Vec<AlertRequest>>,
    fired_tx: mpsc::UnboundedSender<AlertRequest>,
}

impl InProcessAlertHost {
    /// Creates an undetermined host that answers the prompt with
    /// `grant_on_prompt`.
    pub fn new(grant_on_prompt: bool) -> (Self, mpsc::UnboundedReceiver<AlertRequest>) {
        Self::with_status(HostAuthorization::NotDetermined, grant_on_prompt)
    }

    pub fn with_status(
        status: HostAuthorization,
        grant_on_prompt: bool,
    ) -> (Self, mpsc::UnboundedReceiver<AlertRequest>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let host = Self {
            status: Mutex::new(status),
            grant_on_prompt,
            prompts: AtomicUsize::new(0),
            registered: Mutex::new(Vec::new()),
            fired_tx,
        };
        (host, fired_rx)
    }

    /// Simulates a settings change made outside the app.
    pub fn set_status(&self, status: HostAuthorization) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Number of times the user was actually prompted.
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }

    /// Every alert registered so far, in registration order.
    pub fn registered(&self) -> Vec<AlertRequest> {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl NotificationHost for InProcessAlertHost {
    async fn authorization_status(&self) -> HostAuthorization {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn request_authorization(&self) -> bool {
        let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
        if *status == HostAuthorization::NotDetermined {
            self.prompts.fetch_add(1, Ordering::SeqCst);
            *status = if self.grant_on_prompt {
                HostAuthorization::Authorized
            } else {
                HostAuthorization::Denied
            };
        }
        status.allows_alerts()
    }

    async fn register(&self, request: AlertRequest) {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        spawn_one_shot(request, self.fired_tx.clone());
    }
}

/// Delivers `request` on `fired_tx` once `fire_after` has elapsed.
///
/// Must be called from within a tokio runtime.
pub fn spawn_one_shot(request: AlertRequest, fired_tx: mpsc::UnboundedSender<AlertRequest>) {
    tokio::spawn(async move {
        tokio::time::sleep(request.fire_after).await;
        info!(
            "event=alert_fired module=notify status=ok alert_id={}",
            request.id
        );
        // Receiver may be gone when the app is shutting down.
        let _ = fired_tx.send(request);
    });
}
