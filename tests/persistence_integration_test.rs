//! Integration test: saving and restoring sessions on disk
//!
//! Uses a real `FileStore` in a temp directory to check the stored JSON
//! shape, fail-closed loading of foreign or damaged saves, and the autosave
//! cadence driven by the session runtime.

use mybaby::core::{Config, SessionRuntime};
use mybaby::error::SnapshotError;
use mybaby::persistence::{FileStore, KeyValueStore, LoadOutcome, PersistenceGateway};
use mybaby::pet::Mood;
use mybaby::progression::{AchievementId, InteractionKind, RoomId};
use mybaby::session::SessionStore;
use std::fs;
use std::time::Duration;

fn played_session() -> SessionStore {
    let mut session = SessionStore::new();
    for _ in 0..3 {
        session.apply_interaction(InteractionKind::Feed);
    }
    session.apply_interaction(InteractionKind::Play);
    session.request_room_switch(RoomId::Kitchen).unwrap();
    session
}

#[test]
fn test_save_writes_expected_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut gateway = PersistenceGateway::new(FileStore::new(dir.path()));
    gateway.save(&played_session()).unwrap();

    let raw = fs::read_to_string(dir.path().join("babyverse_state.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], "0.3.0");
    assert!(value["timestamp"].as_i64().unwrap() > 0);
    assert_eq!(value["currentRoom"], "kitchen");
    assert_eq!(value["rooms"][1][0], "kitchen");
    assert_eq!(value["rooms"][1][1]["unlocked"], true);
    assert_eq!(value["rooms"][2][1]["unlocked"], false);
    assert_eq!(value["achievements"][0][0], "firstFeed");
    assert_eq!(value["stats"]["totalFeeds"], 3);
    assert_eq!(value["stats"]["totalPlays"], 1);
    assert_eq!(value["babyState"]["mood"], "joyful");
    assert_eq!(value["babyState"]["hunger"], 100.0);
}

#[test]
fn test_restore_across_gateways() {
    let dir = tempfile::tempdir().unwrap();
    let session = played_session();
    PersistenceGateway::new(FileStore::new(dir.path()))
        .save(&session)
        .unwrap();

    let gateway = PersistenceGateway::new(FileStore::new(dir.path()));
    let mut restored = SessionStore::new();
    assert!(gateway.load_into(&mut restored).unwrap());
    assert_eq!(restored, session);
    assert_eq!(restored.current_room(), RoomId::Kitchen);
    assert!(restored
        .progression()
        .is_achievement_unlocked(AchievementId::KitchenUnlocked));
}

#[test]
fn test_hand_written_save_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("babyverse_state.json"),
        r#"{
            "version": "0.3.0",
            "timestamp": 1718000000000,
            "currentRoom": "bathroom",
            "rooms": [["bathroom", {"unlocked": true}]],
            "achievements": [["firstSleep", {"unlocked": true}]],
            "stats": {"totalFeeds": 0, "totalPlays": 0, "totalSleeps": 2},
            "babyState": {"happiness": 140, "hunger": -3, "energy": 100, "mood": "resting"}
        }"#,
    )
    .unwrap();

    let gateway = PersistenceGateway::new(FileStore::new(dir.path()));
    let info = gateway.save_info();
    assert!(info.exists);
    assert_eq!(
        info.saved_at.map(|t| t.timestamp_millis()),
        Some(1718000000000)
    );

    let mut session = SessionStore::new();
    assert!(gateway.load_into(&mut session).unwrap());
    assert_eq!(session.current_room(), RoomId::Bathroom);
    assert_eq!(
        session.unlocked_rooms(),
        vec![RoomId::Bedroom, RoomId::Bathroom]
    );
    let gauges = session.gauges();
    assert_eq!(gauges.happiness, 100.0);
    assert_eq!(gauges.hunger, 0.0);
    assert_eq!(gauges.mood, Mood::Resting);
}

#[test]
fn test_old_version_is_treated_as_no_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let mut snapshot = played_session().export_snapshot();
    snapshot.version = "0.1.0".to_string();
    store
        .set("babyverse_state", &snapshot.to_json().unwrap())
        .unwrap();

    let gateway = PersistenceGateway::new(store);
    assert!(matches!(
        gateway.load().unwrap(),
        LoadOutcome::Rejected(SnapshotError::VersionMismatch { .. })
    ));
    let mut session = SessionStore::new();
    assert!(!gateway.load_into(&mut session).unwrap());
    assert_eq!(session, SessionStore::new());
    // Rejected saves stay on disk until overwritten or cleared
    assert!(gateway.has_saved_state());
}

#[test]
fn test_unknown_room_rejects_whole_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let mut snapshot = played_session().export_snapshot();
    snapshot.rooms[0].0 = "attic".to_string();
    store
        .set("babyverse_state", &snapshot.to_json().unwrap())
        .unwrap();

    let gateway = PersistenceGateway::new(store);
    assert_eq!(
        gateway.load().unwrap(),
        LoadOutcome::Rejected(SnapshotError::UnknownRoom("attic".to_string()))
    );
}

#[test]
fn test_truncated_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("babyverse_state.json"), "{\"version\": \"0.3").unwrap();
    let gateway = PersistenceGateway::new(FileStore::new(dir.path()));
    assert!(matches!(
        gateway.load().unwrap(),
        LoadOutcome::Rejected(SnapshotError::Malformed(_))
    ));
    assert!(!gateway.save_info().exists);
}

#[test]
fn test_clear_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut gateway = PersistenceGateway::new(FileStore::new(dir.path()));
    gateway.save(&SessionStore::new()).unwrap();
    assert!(dir.path().join("babyverse_state.json").exists());

    gateway.clear().unwrap();
    assert!(!dir.path().join("babyverse_state.json").exists());
    assert_eq!(gateway.load().unwrap(), LoadOutcome::Empty);
}

#[test]
fn test_runtime_autosaves_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        storage_key: "nursery".to_string(),
        ..Config::default()
    };
    let mut runtime = SessionRuntime::start(FileStore::new(dir.path()), &config).unwrap();
    runtime.session.apply_interaction(InteractionKind::Sleep);

    assert!(runtime.update(Duration::from_secs(29)).autosave.is_none());
    assert!(!dir.path().join("nursery.json").exists());
    assert!(matches!(
        runtime.update(Duration::from_secs(1)).autosave,
        Some(Ok(()))
    ));
    assert!(dir.path().join("nursery.json").exists());

    let resumed = SessionRuntime::start(FileStore::new(dir.path()), &config).unwrap();
    assert_eq!(resumed.session.stats().total_sleeps, 1);
}
