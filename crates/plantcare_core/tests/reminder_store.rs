use plantcare_core::{ChangeKind, ReminderId, ReminderItem, ReminderStore};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn plant(name: &str) -> ReminderItem {
    ReminderItem::new(name, "in Bedroom", "Full Sun", "Every Day", "20–50 ml")
}

fn names(store: &ReminderStore) -> Vec<String> {
    store.all().into_iter().map(|item| item.name).collect()
}

fn recorded_changes(store: &mut ReminderStore) -> Arc<Mutex<Vec<ChangeKind>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    store.subscribe(move |change| sink.lock().unwrap().push(change.kind));
    changes
}

#[test]
fn add_appends_in_insertion_order() {
    let mut store = ReminderStore::new();
    store.add(plant("Fern"));
    store.add(plant("Monstera"));
    store.add(plant("Fern"));

    assert_eq!(names(&store), ["Fern", "Monstera", "Fern"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn with_items_keeps_seed_order() {
    let store = ReminderStore::with_items(vec![plant("a"), plant("b")]);
    assert_eq!(names(&store), ["a", "b"]);
    assert!(!store.is_empty());
}

#[test]
fn operations_match_reference_list_model() {
    let mut store = ReminderStore::new();
    let mut reference: Vec<ReminderItem> = Vec::new();

    let seeds: Vec<ReminderItem> = ["a", "b", "c", "d", "e"].iter().map(|n| plant(n)).collect();
    for item in &seeds {
        store.add(item.clone());
        reference.push(item.clone());
    }

    store.remove(seeds[1].id);
    reference.retain(|item| item.id != seeds[1].id);

    store.update(seeds[3].id, |item| item.location = "in Kitchen".to_string());
    if let Some(item) = reference.iter_mut().find(|item| item.id == seeds[3].id) {
        item.location = "in Kitchen".to_string();
    }

    store.remove(Uuid::new_v4());
    store.update(Uuid::new_v4(), |item| item.name = "ghost".to_string());

    store.remove(seeds[0].id);
    reference.retain(|item| item.id != seeds[0].id);

    assert_eq!(store.all(), reference);
}

#[test]
fn remove_absent_id_is_silent_noop() {
    let mut store = ReminderStore::new();
    store.add(plant("Fern"));
    let changes = recorded_changes(&mut store);

    assert!(!store.remove(Uuid::new_v4()));
    assert_eq!(store.len(), 1);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn remove_existing_notifies_once() {
    let mut store = ReminderStore::new();
    let fern = plant("Fern");
    let id = fern.id;
    store.add(fern);
    let changes = recorded_changes(&mut store);

    assert!(store.remove(id));
    assert!(store.is_empty());
    assert_eq!(*changes.lock().unwrap(), vec![ChangeKind::Removed(id)]);
}

#[test]
fn update_preserves_position_and_identity() {
    let mut store = ReminderStore::new();
    let items: Vec<ReminderItem> = ["a", "b", "c"].iter().map(|n| plant(n)).collect();
    for item in &items {
        store.add(item.clone());
    }
    let target = items[1].id;

    let found = store.update(target, |item| {
        item.name = "renamed".to_string();
        item.id = Uuid::new_v4();
    });

    assert!(found);
    assert_eq!(names(&store), ["a", "renamed", "c"]);
    assert_eq!(store.all()[1].id, target);
    assert!(store.contains(target));
}

#[test]
fn update_absent_id_reports_not_found_without_notifying() {
    let mut store = ReminderStore::new();
    store.add(plant("Fern"));
    let changes = recorded_changes(&mut store);

    assert!(!store.update(Uuid::new_v4(), |item| item.is_checked = true));
    assert!(changes.lock().unwrap().is_empty());
    assert!(!store.all()[0].is_checked);
}

#[test]
fn toggle_moves_checked_after_unchecked_stably() {
    let mut store = ReminderStore::new();
    let items: Vec<ReminderItem> = ["a", "b", "c", "d"].iter().map(|n| plant(n)).collect();
    for item in &items {
        store.add(item.clone());
    }

    assert_eq!(store.toggle_checked(items[0].id), Some(true));
    assert_eq!(names(&store), ["b", "c", "d", "a"]);

    assert_eq!(store.toggle_checked(items[2].id), Some(true));
    assert_eq!(names(&store), ["b", "d", "a", "c"]);

    assert_eq!(store.toggle_checked(items[0].id), Some(false));
    assert_eq!(names(&store), ["b", "d", "a", "c"]);
}

#[test]
fn double_toggle_restores_flag_and_other_items_order() {
    let mut store = ReminderStore::new();
    let items: Vec<ReminderItem> = ["a", "b", "c", "d"].iter().map(|n| plant(n)).collect();
    for item in &items {
        store.add(item.clone());
    }
    store.toggle_checked(items[3].id);

    let others = |store: &ReminderStore, skip: ReminderId| -> Vec<String> {
        store
            .all()
            .into_iter()
            .filter(|item| item.id != skip)
            .map(|item| item.name)
            .collect()
    };
    let before = others(&store, items[1].id);

    store.toggle_checked(items[1].id);
    store.toggle_checked(items[1].id);

    assert!(!store.get(items[1].id).expect("item exists").is_checked);
    assert_eq!(others(&store, items[1].id), before);
}

#[test]
fn toggle_absent_id_returns_none_without_notifying() {
    let mut store = ReminderStore::new();
    store.add(plant("Fern"));
    let changes = recorded_changes(&mut store);

    assert_eq!(store.toggle_checked(Uuid::new_v4()), None);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn toggle_emits_single_notification_with_partitioned_snapshot() {
    let mut store = ReminderStore::new();
    let first = plant("a");
    let first_id = first.id;
    store.add(first);
    store.add(plant("b"));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |change| {
        let order: Vec<String> = change.items.iter().map(|item| item.name.clone()).collect();
        sink.lock().unwrap().push((change.kind, order));
    });

    store.toggle_checked(first_id);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, ChangeKind::Toggled(first_id));
    assert_eq!(seen[0].1, ["b", "a"]);
}

#[test]
fn notifications_arrive_in_mutation_order() {
    let mut store = ReminderStore::new();
    let changes = recorded_changes(&mut store);

    let fern = plant("Fern");
    let fern_id = fern.id;
    store.add(fern);
    store.update(fern_id, |item| item.water_amount = "50–100 ml".to_string());
    store.toggle_checked(fern_id);
    store.remove(fern_id);

    assert_eq!(
        *changes.lock().unwrap(),
        vec![
            ChangeKind::Added(fern_id),
            ChangeKind::Updated(fern_id),
            ChangeKind::Toggled(fern_id),
            ChangeKind::Removed(fern_id),
        ]
    );
}

#[test]
fn every_subscriber_is_notified_and_unsubscribe_stops_delivery() {
    let mut store = ReminderStore::new();
    let first = recorded_changes(&mut store);

    let second = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&second);
    let subscription = store.subscribe(move |_| *counter.lock().unwrap() += 1);

    store.add(plant("a"));
    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));
    store.add(plant("b"));

    assert_eq!(first.lock().unwrap().len(), 2);
    assert_eq!(*second.lock().unwrap(), 1);
}

#[test]
fn all_returns_detached_copy() {
    let mut store = ReminderStore::new();
    store.add(plant("Fern"));

    let mut snapshot = store.all();
    snapshot[0].is_checked = true;
    snapshot[0].name = "changed".to_string();
    snapshot.clear();

    let current = store.all();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].name, "Fern");
    assert!(!current[0].is_checked);
}

#[test]
fn add_rejects_id_already_in_store() {
    let mut store = ReminderStore::new();
    let fern = plant("Fern");
    let id = fern.id;
    let changes = recorded_changes(&mut store);

    assert!(store.add(fern.clone()));
    assert!(!store.add(fern));
    assert_eq!(store.len(), 1);
    assert_eq!(*changes.lock().unwrap(), vec![ChangeKind::Added(id)]);

    assert!(store.remove(id));
    assert!(!store.contains(id));
}

#[test]
fn with_items_drops_repeated_ids() {
    let first = plant("first");
    let mut repeat = first.clone();
    repeat.name = "repeat".to_string();
    let other = plant("other");

    let store = ReminderStore::with_items(vec![first.clone(), repeat, other]);

    assert_eq!(names(&store), ["first", "other"]);
    assert_eq!(store.get(first.id).expect("first kept").name, "first");
}
