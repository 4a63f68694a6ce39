//! Notification host driven by the Dart side.
//!
//! # Responsibility
//! - Park the permission round-trip until Dart reports the user's answer.
//! - Fire registered alerts from tokio timers for Dart to drain.
//!
//! # Invariants
//! - At most one prompt is pending; the scheduler serializes resolution.
//! - A prompt whose answer channel is dropped counts as not granted.

use async_trait::async_trait;
use log::info;
use plantcare_core::{spawn_one_shot, AlertRequest, HostAuthorization, NotificationHost};
use std::sync::{Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

pub struct FlutterAlertHost {
    status: Mutex<HostAuthorization>,
    pending_prompt: Mutex<Option<oneshot::Sender<bool>>>,
    fired_tx: mpsc::UnboundedSender<AlertRequest>,
}

impl FlutterAlertHost {
    pub fn new(status: HostAuthorization) -> (Self, mpsc::UnboundedReceiver<AlertRequest>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let host = Self {
            status: Mutex::new(status),
            pending_prompt: Mutex::new(None),
            fired_tx,
        };
        (host, fired_rx)
    }

    pub fn set_status(&self, status: HostAuthorization) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Whether a save is waiting for the user to answer the OS prompt.
    pub fn has_pending_prompt(&self) -> bool {
        self.pending_prompt
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Resolves the pending prompt. Returns `false` when none is pending.
    pub fn answer_prompt(&self, granted: bool) -> bool {
        let sender = self
            .pending_prompt
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(sender) => sender.send(granted).is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl NotificationHost for FlutterAlertHost {
    async fn authorization_status(&self) -> HostAuthorization {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn request_authorization(&self) -> bool {
        let answer = {
            let current = *self.status.lock().unwrap_or_else(PoisonError::into_inner);
            if current != HostAuthorization::NotDetermined {
                return current.allows_alerts();
            }
            let (sender, receiver) = oneshot::channel();
            *self
                .pending_prompt
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(sender);
            receiver
        };
        info!("event=permission_prompt module=ffi status=pending");

        let granted = answer.await.unwrap_or(false);
        self.set_status(if granted {
            HostAuthorization::Authorized
        } else {
            HostAuthorization::Denied
        });
        info!("event=permission_prompt module=ffi status=answered granted={granted}");
        granted
    }

    async fn register(&self, request: AlertRequest) {
        spawn_one_shot(request, self.fired_tx.clone());
    }
}
