//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own one app handle per Flutter engine; no process-wide store.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Reminder IDs cross the boundary as hyphenated UUID strings.
//! - Invalid IDs behave like absent IDs: the call is a no-op.

use crate::host::FlutterAlertHost;
use plantcare_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_host_authorization, ping as ping_inner, AlertRequest, CompletionSnapshot,
    HostAuthorization, LightExposure, NotificationScheduler, ReminderConfig, ReminderDraft,
    ReminderId, ReminderItem, ReminderService, Room, WaterAmount, WateringFrequency,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Picker labels for the add-plant sheet, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub rooms: Vec<String>,
    pub lights: Vec<String>,
    pub watering_days: Vec<String>,
    pub water_amounts: Vec<String>,
}

/// Returns every picker option set.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_options() -> PickerOptions {
    PickerOptions {
        rooms: Room::all().iter().map(|v| v.label().to_string()).collect(),
        lights: LightExposure::all()
            .iter()
            .map(|v| v.label().to_string())
            .collect(),
        watering_days: WateringFrequency::all()
            .iter()
            .map(|v| v.label().to_string())
            .collect(),
        water_amounts: WaterAmount::all()
            .iter()
            .map(|v| v.label().to_string())
            .collect(),
    }
}

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub is_checked: bool,
    pub light: String,
    pub watering_days: String,
    pub water_amount: String,
}

/// Full checklist state returned after every call that may change it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistState {
    /// Rows in display order (unchecked first after any toggle).
    pub rows: Vec<ReminderRow>,
    /// Checked share in `0.0..=100.0`.
    pub percent: f64,
    /// Status category id (`waiting|single_checked|all_done|partial`).
    pub status: String,
    /// Default English status line.
    pub status_text: String,
    pub all_done: bool,
    /// `true` only when this call completed the list; navigate on it.
    pub just_completed: bool,
}

/// Result envelope for save calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveResponse {
    pub ok: bool,
    pub reminder_id: Option<String>,
    pub message: String,
    pub state: ChecklistState,
}

/// One delivered local alert, ready to be shown by the Dart side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredAlert {
    pub id: String,
    pub title: String,
    pub body: String,
}

type AppService = ReminderService<FlutterAlertHost>;

/// App handle owning one reminder store and its scheduler runtime.
///
/// Dart creates exactly one per engine and passes it to every screen.
pub struct PlantReminderApp {
    service: Mutex<AppService>,
    fired: Mutex<UnboundedReceiver<AlertRequest>>,
    runtime: Runtime,
}

impl PlantReminderApp {
    /// Creates the app handle.
    ///
    /// Input semantics:
    /// - `notification_status`: platform status id
    ///   (`not_determined|denied|authorized|provisional`); unknown values
    ///   are treated as `not_determined`.
    /// - `reminder_delay_secs`: delay of the alert armed per save; `None`
    ///   keeps the 10 second default.
    ///
    /// When the status is undetermined, the first save parks on a
    /// permission prompt: Dart sees it via `pending_permission_prompt` and
    /// reports the user's choice with `answer_permission_prompt`.
    ///
    /// # FFI contract
    /// - Sync call; starts one background timer thread.
    /// - Returns an error message only when the runtime cannot start.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new(
        notification_status: String,
        reminder_delay_secs: Option<u64>,
    ) -> Result<Self, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("plantcare-timer")
            .enable_time()
            .build()
            .map_err(|err| format!("failed to start reminder runtime: {err}"))?;

        let status = parse_host_authorization(&notification_status).unwrap_or_else(|err| {
            log::warn!("event=app_create module=ffi status=fallback reason={err}");
            HostAuthorization::NotDetermined
        });
        let mut config = ReminderConfig::default();
        if let Some(delay_secs) = reminder_delay_secs {
            config.default_delay_secs = delay_secs;
        }
        let (host, fired) = FlutterAlertHost::new(status);
        let scheduler =
            NotificationScheduler::new(Arc::new(host), runtime.handle().clone(), config);

        Ok(Self {
            service: Mutex::new(ReminderService::new(scheduler)),
            fired: Mutex::new(fired),
            runtime,
        })
    }

    /// Validates and saves one plant, then arms its water reminder.
    ///
    /// # FFI contract
    /// - Never panics.
    /// - `ok=false` for blank names or labels outside the picker sets;
    ///   nothing is stored or scheduled then.
    #[flutter_rust_bridge::frb(sync)]
    pub fn save_plant(
        &self,
        name: String,
        room: String,
        light: String,
        watering_days: String,
        water_amount: String,
    ) -> SaveResponse {
        let mut service = self.lock_service();
        let draft = match build_draft(name, &room, &light, &watering_days, &water_amount) {
            Ok(draft) => draft,
            Err(message) => {
                let state = checklist_state(&service.items(), service.snapshot());
                return SaveResponse {
                    ok: false,
                    reminder_id: None,
                    message,
                    state,
                };
            }
        };

        match service.save_draft(&draft) {
            Ok(id) => SaveResponse {
                ok: true,
                reminder_id: Some(id.to_string()),
                message: "Reminder saved.".to_string(),
                state: checklist_state(&service.items(), service.snapshot()),
            },
            Err(err) => SaveResponse {
                ok: false,
                reminder_id: None,
                message: format!("save_plant failed: {err}"),
                state: checklist_state(&service.items(), service.snapshot()),
            },
        }
    }

    /// Toggles one row's checked flag.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_checked(&self, reminder_id: String) -> ChecklistState {
        let mut service = self.lock_service();
        let snapshot = match parse_reminder_id(&reminder_id) {
            Some(id) => service.toggle_checked(id),
            None => service.snapshot(),
        };
        checklist_state(&service.items(), snapshot)
    }

    /// Deletes one row.
    #[flutter_rust_bridge::frb(sync)]
    pub fn remove_plant(&self, reminder_id: String) -> ChecklistState {
        let mut service = self.lock_service();
        let snapshot = match parse_reminder_id(&reminder_id) {
            Some(id) => service.remove(id),
            None => service.snapshot(),
        };
        checklist_state(&service.items(), snapshot)
    }

    /// Edits one row's fields in place; position and ID are kept.
    ///
    /// Labels are stored as given; the edit view may offer free text.
    #[flutter_rust_bridge::frb(sync)]
    pub fn edit_plant(
        &self,
        reminder_id: String,
        name: String,
        location: String,
        light: String,
        watering_days: String,
        water_amount: String,
    ) -> ChecklistState {
        let mut service = self.lock_service();
        let snapshot = match parse_reminder_id(&reminder_id) {
            Some(id) => service.update(id, |item| {
                item.name = name;
                item.location = location;
                item.light = light;
                item.watering_days = watering_days;
                item.water_amount = water_amount;
            }),
            None => service.snapshot(),
        };
        checklist_state(&service.items(), snapshot)
    }

    /// Current checklist state; never reports a completion edge.
    #[flutter_rust_bridge::frb(sync)]
    pub fn checklist(&self) -> ChecklistState {
        let service = self.lock_service();
        checklist_state(&service.items(), service.snapshot())
    }

    /// Pushes a platform permission change (e.g. from system settings).
    ///
    /// Returns the scheduler state id after refresh, or an error message.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_notification_status(&self, status: String) -> String {
        let status = match parse_host_authorization(&status) {
            Ok(status) => status,
            Err(err) => return format!("set_notification_status failed: {err}"),
        };

        let scheduler = self.lock_service().scheduler().clone();
        let host = scheduler.host();
        if host.has_pending_prompt() {
            // The scheduler holds its permission lock until the prompt is
            // answered; refreshing now would block the calling thread.
            if status == HostAuthorization::NotDetermined {
                return "unknown".to_string();
            }
            host.answer_prompt(status.allows_alerts());
        }
        host.set_status(status);
        let state = self.runtime.block_on(scheduler.refresh_permission());
        state.as_str().to_string()
    }

    /// Whether a save is waiting on the OS notification prompt.
    #[flutter_rust_bridge::frb(sync)]
    pub fn pending_permission_prompt(&self) -> bool {
        self.lock_service().scheduler().host().has_pending_prompt()
    }

    /// Reports the user's answer to the OS notification prompt.
    ///
    /// Returns `false` when no prompt was pending.
    #[flutter_rust_bridge::frb(sync)]
    pub fn answer_permission_prompt(&self, granted: bool) -> bool {
        self.lock_service().scheduler().host().answer_prompt(granted)
    }

    /// Drains alerts that fired since the previous call.
    #[flutter_rust_bridge::frb(sync)]
    pub fn take_fired_alerts(&self) -> Vec<FiredAlert> {
        let mut fired = self.fired.lock().unwrap_or_else(PoisonError::into_inner);
        let mut alerts = Vec::new();
        while let Ok(alert) = fired.try_recv() {
            alerts.push(FiredAlert {
                id: alert.id,
                title: alert.title,
                body: alert.body,
            });
        }
        alerts
    }

    fn lock_service(&self) -> MutexGuard<'_, AppService> {
        self.service.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn build_draft(
    name: String,
    room: &str,
    light: &str,
    watering_days: &str,
    water_amount: &str,
) -> Result<ReminderDraft, String> {
    Ok(ReminderDraft {
        name,
        room: Room::parse(room).ok_or_else(|| format!("unknown room: {room}"))?,
        light: LightExposure::parse(light).ok_or_else(|| format!("unknown light: {light}"))?,
        watering: WateringFrequency::parse(watering_days)
            .ok_or_else(|| format!("unknown watering days: {watering_days}"))?,
        water_amount: WaterAmount::parse(water_amount)
            .ok_or_else(|| format!("unknown water amount: {water_amount}"))?,
    })
}

fn parse_reminder_id(value: &str) -> Option<ReminderId> {
    Uuid::parse_str(value.trim()).ok()
}

fn checklist_state(items: &[ReminderItem], snapshot: CompletionSnapshot) -> ChecklistState {
    ChecklistState {
        rows: items.iter().map(to_row).collect(),
        percent: snapshot.percent,
        status: snapshot.status.as_str().to_string(),
        status_text: snapshot.status.default_text(),
        all_done: snapshot.all_done,
        just_completed: snapshot.just_completed,
    }
}

fn to_row(item: &ReminderItem) -> ReminderRow {
    ReminderRow {
        id: item.id.to_string(),
        name: item.name.clone(),
        location: item.location.clone(),
        is_checked: item.is_checked,
        light: item.light.clone(),
        watering_days: item.watering_days.clone(),
        water_amount: item.water_amount.clone(),
    }
}
