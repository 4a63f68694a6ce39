use plantcare_core::{
    is_all_done, percent_complete, status_message, CompletionTracker, ReminderItem, ReminderStore,
    StatusMessage,
};

fn items(checked: &[bool]) -> Vec<ReminderItem> {
    checked
        .iter()
        .enumerate()
        .map(|(index, is_checked)| {
            let mut item = ReminderItem::new(
                format!("plant-{index}"),
                "in Bedroom",
                "Full Sun",
                "Every Day",
                "20–50 ml",
            );
            item.is_checked = *is_checked;
            item
        })
        .collect()
}

#[test]
fn percent_of_empty_list_is_zero() {
    assert_eq!(percent_complete(&[]), 0.0);
}

#[test]
fn percent_is_checked_share() {
    let cases: [(&[bool], f64); 4] = [
        (&[false, false], 0.0),
        (&[true, false, false], 100.0 / 3.0),
        (&[true, true, false, false], 50.0),
        (&[true, true, true], 100.0),
    ];
    for (checked, expected) in cases {
        let percent = percent_complete(&items(checked));
        assert!(
            (percent - expected).abs() < 1e-9,
            "expected {expected}, got {percent}"
        );
        assert!((0.0..=100.0).contains(&percent));
    }
}

#[test]
fn status_follows_precedence_for_three_items() {
    assert_eq!(
        status_message(&items(&[false, false, false])),
        StatusMessage::Waiting
    );
    assert_eq!(
        status_message(&items(&[false, true, false])),
        StatusMessage::SingleChecked
    );
    assert_eq!(
        status_message(&items(&[true, true, false])),
        StatusMessage::Partial { checked: 2 }
    );
    assert_eq!(
        status_message(&items(&[true, true, true])),
        StatusMessage::AllDone
    );
}

#[test]
fn status_of_empty_list_is_waiting() {
    assert_eq!(status_message(&[]), StatusMessage::Waiting);
}

#[test]
fn single_checked_wins_over_all_done_for_one_item() {
    assert_eq!(status_message(&items(&[true])), StatusMessage::SingleChecked);
    assert!(is_all_done(&items(&[true])));
}

#[test]
fn status_default_text_matches_app_copy() {
    assert_eq!(
        StatusMessage::Waiting.default_text(),
        "Your plants are waiting for a sip 💦"
    );
    assert_eq!(
        StatusMessage::SingleChecked.default_text(),
        "1 of your plants feels loved today ✨"
    );
    assert_eq!(
        StatusMessage::AllDone.default_text(),
        "All your plants are happy today 🌸"
    );
    assert_eq!(
        StatusMessage::Partial { checked: 4 }.default_text(),
        "4 of your plants feel loved today ✨"
    );
    assert_eq!(StatusMessage::Partial { checked: 4 }.as_str(), "partial");
}

#[test]
fn all_done_requires_non_empty_fully_checked_list() {
    assert!(!is_all_done(&[]));
    assert!(!is_all_done(&items(&[true, false])));
    assert!(is_all_done(&items(&[true, true])));
}

#[test]
fn tracker_fires_edge_once_and_refires_after_uncheck() {
    let mut store = ReminderStore::new();
    let seeds = items(&[false, false]);
    let (first, second) = (seeds[0].id, seeds[1].id);
    for item in seeds {
        store.add(item);
    }
    let mut tracker = CompletionTracker::new();
    let mut edges = 0;

    let mut step = |store: &mut ReminderStore, id| {
        store.toggle_checked(id);
        let snapshot = tracker.observe(&store.all());
        if snapshot.just_completed {
            edges += 1;
        }
        snapshot
    };

    let snapshot = step(&mut store, first);
    assert!(!snapshot.all_done);
    assert_eq!(snapshot.percent, 50.0);

    let snapshot = step(&mut store, second);
    assert!(snapshot.all_done);
    assert!(snapshot.just_completed);
    assert_eq!(snapshot.status, StatusMessage::AllDone);

    let snapshot = step(&mut store, first);
    assert!(!snapshot.all_done);
    assert!(!snapshot.just_completed);

    let snapshot = step(&mut store, first);
    assert!(snapshot.just_completed);

    drop(step);
    assert_eq!(edges, 2);
}

#[test]
fn tracker_is_level_silent_while_list_stays_complete() {
    let done = items(&[true, true]);
    let mut tracker = CompletionTracker::new();

    assert!(tracker.observe(&done).just_completed);
    assert!(!tracker.observe(&done).just_completed);
    assert!(!tracker.observe(&done).just_completed);
    assert!(tracker.is_all_done());
}

#[test]
fn tracker_rearms_after_list_becomes_empty() {
    let mut tracker = CompletionTracker::new();
    assert!(tracker.observe(&items(&[true])).just_completed);
    assert!(!tracker.observe(&[]).all_done);
    assert!(tracker.observe(&items(&[true])).just_completed);
}

#[test]
fn primed_tracker_does_not_fire_for_seed_state() {
    let done = items(&[true, true]);
    let mut tracker = CompletionTracker::primed(&done);
    assert!(!tracker.observe(&done).just_completed);
}
