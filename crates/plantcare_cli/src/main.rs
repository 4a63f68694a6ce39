//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `plantcare_core` linkage.
//! - Walk one save/check cycle against the in-process alert host.

use plantcare_core::{
    InProcessAlertHost, NotificationScheduler, ReminderConfig, ReminderDraft, ReminderService,
    Room,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

#[tokio::main]
async fn main() {
    println!("plantcare_core ping={}", plantcare_core::ping());
    println!("plantcare_core version={}", plantcare_core::core_version());

    // Short delay keeps the smoke run quick; the app uses the 10 s default.
    let config = ReminderConfig {
        default_delay_secs: 1,
        ..ReminderConfig::default()
    };
    let (host, mut fired) = InProcessAlertHost::new(true);
    let scheduler = NotificationScheduler::new(Arc::new(host), Handle::current(), config);
    let mut service = ReminderService::new(scheduler);

    let mut draft = ReminderDraft::named("Fern");
    draft.room = Room::Balcony;
    let fern_id = match service.save_draft(&draft) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("save failed: {err}");
            std::process::exit(1);
        }
    };

    let before = service.snapshot();
    println!(
        "saved plants={} percent={:.0} status={}",
        service.items().len(),
        before.percent,
        before.status.default_text()
    );

    let after = service.toggle_checked(fern_id);
    println!(
        "checked percent={:.0} all_done={} just_completed={} status={}",
        after.percent,
        after.all_done,
        after.just_completed,
        after.status.default_text()
    );

    match tokio::time::timeout(Duration::from_secs(5), fired.recv()).await {
        Ok(Some(alert)) => println!("alert id={} title={} body={}", alert.id, alert.title, alert.body),
        _ => println!("alert not delivered"),
    }
}
