//! Observable reminder store.
//!
//! # Responsibility
//! - Provide add/remove/update/toggle APIs over the owned reminder list.
//! - Keep unchecked reminders ahead of checked ones after each toggle.
//! - Deliver one change notification per effective mutation.
//!
//! # Invariants
//! - Insertion order is display order, except that `toggle_checked` applies
//!   a stable partition (unchecked first, relative order kept per group).
//! - Listeners run synchronously, in registration order, before the
//!   mutating call returns.
//! - `update` can never change an item's `id`.
//! - IDs are unique within one store; duplicate adds are rejected.

use crate::model::reminder::{ReminderId, ReminderItem};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Kind of mutation carried by one change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added(ReminderId),
    Removed(ReminderId),
    Updated(ReminderId),
    /// Covers both the flag flip and the follow-up partition.
    Toggled(ReminderId),
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, Copy)]
pub struct StoreChange<'a> {
    pub kind: ChangeKind,
    /// Post-mutation snapshot, in display order.
    pub items: &'a [ReminderItem],
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange<'_>) + Send>;

/// Single in-memory owner of the reminder list.
#[derive(Default)]
pub struct ReminderStore {
    items: Vec<ReminderItem>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with caller-supplied items, kept in order.
    ///
    /// Later items repeating an earlier ID are dropped.
    pub fn with_items(items: Vec<ReminderItem>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();
        Self {
            items,
            ..Self::default()
        }
    }

    /// Appends one reminder at the end and notifies subscribers.
    ///
    /// No duplicate-name or content checks are performed. Returns `false`
    /// without notifying when the store already holds `item.id`.
    pub fn add(&mut self, item: ReminderItem) -> bool {
        let id = item.id;
        if self.contains(id) {
            warn!("event=reminder_added module=store status=duplicate_id id={id}");
            return false;
        }

        self.items.push(item);
        info!(
            "event=reminder_added module=store status=ok id={} count={}",
            id,
            self.items.len()
        );
        self.notify(ChangeKind::Added(id));
        true
    }

    /// Removes the reminder with `id`.
    ///
    /// Returns whether an item was removed; subscribers are notified only
    /// in that case.
    pub fn remove(&mut self, id: ReminderId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=reminder_removed module=store status=not_found id={id}");
            return false;
        };

        self.items.remove(index);
        info!(
            "event=reminder_removed module=store status=ok id={} count={}",
            id,
            self.items.len()
        );
        self.notify(ChangeKind::Removed(id));
        true
    }

    /// Applies `mutator` to the reminder with `id` in place.
    ///
    /// Position is preserved, and the ID is restored if the mutator
    /// overwrote it. Returns whether the item was found.
    pub fn update<F>(&mut self, id: ReminderId, mutator: F) -> bool
    where
        F: FnOnce(&mut ReminderItem),
    {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=reminder_updated module=store status=not_found id={id}");
            return false;
        };

        mutator(item);
        item.id = id;
        info!("event=reminder_updated module=store status=ok id={id}");
        self.notify(ChangeKind::Updated(id));
        true
    }

    /// Flips `is_checked` on the reminder with `id`, then moves checked
    /// reminders after unchecked ones.
    ///
    /// Emits a single notification covering both steps. Returns the new
    /// checked value, or `None` when `id` is absent.
    pub fn toggle_checked(&mut self, id: ReminderId) -> Option<bool> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=reminder_toggled module=store status=not_found id={id}");
            return None;
        };

        let checked = item.toggle();
        stable_partition_checked(&mut self.items);
        info!("event=reminder_toggled module=store status=ok id={id} checked={checked}");
        self.notify(ChangeKind::Toggled(id));
        Some(checked)
    }

    /// Returns a copy of the current list in display order.
    pub fn all(&self) -> Vec<ReminderItem> {
        self.items.clone()
    }

    /// Borrowed view for in-crate policy evaluation.
    pub(crate) fn as_slice(&self) -> &[ReminderItem] {
        &self.items
    }

    /// Returns a copy of one reminder.
    pub fn get(&self, id: ReminderId) -> Option<ReminderItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    pub fn contains(&self, id: ReminderId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a listener called after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange<'_>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    fn position(&self, id: ReminderId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn notify(&mut self, kind: ChangeKind) {
        let change = StoreChange {
            kind,
            items: &self.items,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

/// Moves checked reminders after unchecked ones, keeping relative order
/// within each group.
fn stable_partition_checked(items: &mut Vec<ReminderItem>) {
    let (unchecked, checked): (Vec<_>, Vec<_>) =
        items.drain(..).partition(|item| !item.is_checked);
    items.extend(unchecked);
    items.extend(checked);
}
