//! Reminder use-case service.
//!
//! # Responsibility
//! - Turn a validated draft into a stored reminder plus one armed alert.
//! - Re-evaluate completion after every mutation and surface the edge.
//!
//! # Invariants
//! - Exactly one reminder is scheduled per successful save; none on
//!   validation failure.
//! - The completion tracker sees every mutation in issue order.

use crate::model::draft::{DraftError, ReminderDraft};
use crate::model::reminder::{ReminderId, ReminderItem};
use crate::notify::host::NotificationHost;
use crate::notify::scheduler::NotificationScheduler;
use crate::policy::completion::{CompletionSnapshot, CompletionTracker};
use crate::store::reminder_store::{ReminderStore, StoreChange, SubscriptionId};

/// Application-level facade over one store instance.
pub struct ReminderService<H: NotificationHost> {
    store: ReminderStore,
    tracker: CompletionTracker,
    scheduler: NotificationScheduler<H>,
}

impl<H: NotificationHost> ReminderService<H> {
    /// Creates a service over an empty store.
    pub fn new(scheduler: NotificationScheduler<H>) -> Self {
        Self::with_store(ReminderStore::new(), scheduler)
    }

    /// Creates a service over a caller-seeded store.
    ///
    /// The tracker is primed from the seed, so an already-complete list
    /// does not fire a completion edge on the first mutation.
    pub fn with_store(store: ReminderStore, scheduler: NotificationScheduler<H>) -> Self {
        let tracker = CompletionTracker::primed(store.as_slice());
        Self {
            store,
            tracker,
            scheduler,
        }
    }

    /// Validates `draft`, stores it, and arms one water reminder.
    ///
    /// # Errors
    /// - `DraftError::EmptyName` when the trimmed name is empty. Nothing is
    ///   stored or scheduled in that case.
    pub fn save_draft(&mut self, draft: &ReminderDraft) -> Result<ReminderId, DraftError> {
        let item = draft.build()?;
        let (id, _) = self.add(item);
        let delay = self.scheduler.config().default_delay();
        self.scheduler.schedule_water_reminder(delay);
        Ok(id)
    }

    /// Adds an already-built item without scheduling an alert.
    ///
    /// The snapshot carries the completion edge when the added item is
    /// already checked and completes the list. A duplicate ID leaves the
    /// store unchanged.
    pub fn add(&mut self, item: ReminderItem) -> (ReminderId, CompletionSnapshot) {
        let id = item.id;
        self.store.add(item);
        (id, self.observe())
    }

    pub fn remove(&mut self, id: ReminderId) -> CompletionSnapshot {
        self.store.remove(id);
        self.observe()
    }

    pub fn update<F>(&mut self, id: ReminderId, mutator: F) -> CompletionSnapshot
    where
        F: FnOnce(&mut ReminderItem),
    {
        self.store.update(id, mutator);
        self.observe()
    }

    pub fn toggle_checked(&mut self, id: ReminderId) -> CompletionSnapshot {
        self.store.toggle_checked(id);
        self.observe()
    }

    /// Derived state for the current list, without advancing the tracker.
    pub fn snapshot(&self) -> CompletionSnapshot {
        let mut preview = self.tracker.clone();
        preview.observe(self.store.as_slice())
    }

    pub fn items(&self) -> Vec<ReminderItem> {
        self.store.all()
    }

    pub fn get(&self, id: ReminderId) -> Option<ReminderItem> {
        self.store.get(id)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange<'_>) + Send + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.store.unsubscribe(subscription)
    }

    pub fn scheduler(&self) -> &NotificationScheduler<H> {
        &self.scheduler
    }

    fn observe(&mut self) -> CompletionSnapshot {
        self.tracker.observe(self.store.as_slice())
    }
}
