//! End-to-end scenarios through the tracker facade.

use poker_series_tracker::store::{players_key, LEGACY_PLAYERS_KEY, SERIES_KEY};
use poker_series_tracker::{
    FileStore, KeyValueStore, MemoryStore, MigrationOutcome, PokerTracker, SeriesInput,
    StatSubmission, TrackerError,
};

fn started(store: MemoryStore) -> PokerTracker<MemoryStore> {
    let mut tracker = PokerTracker::new(store);
    tracker.init().unwrap();
    tracker
}

#[test]
fn fresh_install_has_default_series_and_no_players() {
    let tracker = started(MemoryStore::new());
    let series = tracker.list_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].id, "default");
    assert_eq!(series[0].name, "Default Series");
    assert_eq!(tracker.current_series().map(|s| s.id.as_str()), Some("default"));
    assert!(tracker.list_players().is_empty());
    assert!(tracker.store().contains_key(SERIES_KEY));
}

#[test]
fn legacy_players_show_up_in_default_series() {
    let legacy = r#"[{"id":"1","name":"Bob","points":10,"games":2,"ppg":5}]"#;
    let mut store = MemoryStore::new();
    store.put(LEGACY_PLAYERS_KEY, legacy.to_string()).unwrap();

    let mut tracker = PokerTracker::new(store);
    assert_eq!(
        tracker.init().unwrap(),
        MigrationOutcome::MigratedLegacy { players: 1 }
    );
    let players = tracker.list_players();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Bob");
    assert_eq!(players[0].ppg, 5.0);
    assert_eq!(tracker.store().get(&players_key("default")).as_deref(), Some(legacy));
    assert!(!tracker.store().contains_key(LEGACY_PLAYERS_KEY));
}

#[test]
fn cumulative_update_merges_by_name() {
    let mut tracker = started(MemoryStore::new());
    tracker
        .create_series(&SeriesInput::new("Thursday Game", false))
        .unwrap();
    tracker
        .submit_player(&StatSubmission::new("Ann", 5.0, 2), None)
        .unwrap();
    tracker
        .submit_player(&StatSubmission::new("ann", 3.0, 1), None)
        .unwrap();

    let players = tracker.list_players();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "ann");
    assert_eq!(players[0].points, 8.0);
    assert_eq!(players[0].games, 3);
    assert_eq!(players[0].ppg, 2.67);
}

#[test]
fn bounty_is_hidden_until_series_flag_is_set() {
    let mut tracker = started(MemoryStore::new());
    let p = tracker
        .submit_player(&StatSubmission::new("Zed", 1.0, 1).with_bounty(4.0), None)
        .unwrap();
    assert_eq!(p.bounty, None);
    assert_eq!(tracker.list_players()[0].bounty, None);
    assert_eq!(tracker.summary().total_bounty, None);

    tracker
        .update_series("default", &SeriesInput::new("Default Series", true))
        .unwrap();
    assert_eq!(tracker.list_players()[0].bounty, Some(4.0));
    assert_eq!(tracker.ranked_players()[0].bounty, Some(4.0));
    assert_eq!(tracker.summary().total_bounty, Some(4.0));
}

#[test]
fn bounty_series_shows_zero_for_players_without_bounty() {
    let mut tracker = started(MemoryStore::new());
    tracker.submit_player(&StatSubmission::new("Yan", 1.0, 1), None).unwrap();
    tracker
        .update_series("default", &SeriesInput::new("Default Series", true))
        .unwrap();
    assert_eq!(tracker.player(&tracker.list_players()[0].id).unwrap().bounty, Some(0.0));
}

#[test]
fn invalid_series_create_changes_nothing() {
    let mut tracker = started(MemoryStore::new());
    let before = tracker.list_series().to_vec();
    let stored_before = tracker.store().get(SERIES_KEY);

    let err = tracker
        .create_series(&SeriesInput::new("   ", false))
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput(_)));
    assert_eq!(tracker.list_series(), before.as_slice());
    assert_eq!(tracker.store().get(SERIES_KEY), stored_before);
}

#[test]
fn players_are_scoped_per_series() {
    let mut tracker = started(MemoryStore::new());
    tracker.submit_player(&StatSubmission::new("Ann", 1.0, 1), None).unwrap();

    let spring = tracker
        .create_series(&SeriesInput::new("Spring", false))
        .unwrap();
    assert_eq!(tracker.current_series().map(|s| s.id.clone()), Some(spring.id.clone()));
    assert!(tracker.list_players().is_empty());
    tracker.submit_player(&StatSubmission::new("Bea", 2.0, 1), None).unwrap();

    assert!(tracker.select_series("default"));
    let names: Vec<_> = tracker.list_players().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Ann"]);

    assert!(!tracker.select_series("nope"));
    assert_eq!(tracker.current_series().map(|s| s.id.as_str()), Some("default"));

    tracker.select_series(&spring.id);
    let names: Vec<_> = tracker.list_players().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Bea"]);
}

#[test]
fn standings_and_delete() {
    let mut tracker = started(MemoryStore::new());
    let a = tracker.submit_player(&StatSubmission::new("A", 10.0, 2), None).unwrap();
    tracker.submit_player(&StatSubmission::new("B", 10.0, 1), None).unwrap();
    tracker.submit_player(&StatSubmission::new("C", 12.0, 12), None).unwrap();

    let rows: Vec<_> = tracker
        .standings()
        .into_iter()
        .map(|s| (s.rank, s.player.name))
        .collect();
    assert_eq!(
        rows,
        vec![(1, "C".to_string()), (2, "B".to_string()), (3, "A".to_string())]
    );

    assert!(tracker.delete_player(&a.id).unwrap());
    assert!(!tracker.delete_player(&a.id).unwrap());
    assert_eq!(tracker.summary().total_players, 2);
}

#[test]
fn uninitialised_tracker_has_no_series() {
    let mut tracker = PokerTracker::new(MemoryStore::new());
    assert!(tracker.current_series().is_none());
    assert!(tracker.list_players().is_empty());
    assert_eq!(
        tracker.submit_player(&StatSubmission::new("A", 1.0, 1), None),
        Err(TrackerError::NoSeriesSelected)
    );
}

#[test]
fn write_failure_is_reported_but_state_advances() {
    let mut tracker = started(MemoryStore::new());
    let mut store = tracker.into_store();
    store.set_quota(Some(0));
    let mut tracker = PokerTracker::new(store);
    tracker.init().unwrap();

    let err = tracker
        .submit_player(&StatSubmission::new("Quinn", 3.0, 1), None)
        .unwrap_err();
    assert!(matches!(err, TrackerError::Storage(_)));
    assert_eq!(tracker.list_players().len(), 1);

    let store = tracker.into_store();
    assert!(!store.contains_key(&players_key("default")));
}

#[test]
fn file_backed_tracker_survives_restart() {
    let path = std::env::temp_dir().join(format!("poker_series_tracker_restart_{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let created_id = {
        let mut tracker = PokerTracker::new(FileStore::open(&path));
        tracker.init().unwrap();
        let s = tracker
            .create_series(&SeriesInput::new("Club", true))
            .unwrap();
        tracker
            .submit_player(&StatSubmission::new("Ann", 6.0, 4).with_bounty(1.5), None)
            .unwrap();
        s.id
    };

    let mut tracker = PokerTracker::new(FileStore::open(&path));
    assert_eq!(tracker.init().unwrap(), MigrationOutcome::AlreadyMigrated);
    assert_eq!(tracker.list_series().len(), 2);
    assert_eq!(tracker.current_series().map(|s| s.id.as_str()), Some("default"));

    assert!(tracker.select_series(&created_id));
    let players = tracker.list_players();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].ppg, 1.5);
    assert_eq!(players[0].bounty, Some(1.5));
    let _ = std::fs::remove_file(&path);
}
