//! Integration tests for snapshot persistence and share links
//!
//! Tests cover:
//! - File store save/load with checksum verification
//! - Rejection of corrupted, outdated and invalid snapshots
//! - Share link encoding and access mode propagation
//! - Exact float round-trips through both persistence paths

use event_split_core::store::{compute_snapshot_checksum, PersistedSnapshot, SNAPSHOT_FORMAT_VERSION};
use event_split_core::{
    default_expenses, generate_initial_attendees, reconcile_participation, AccessMode, Attendee,
    EventConfig, EventSnapshot, JsonFileStore, ShareLink, SnapshotError, Store, StoreError,
};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sample_snapshot() -> EventSnapshot {
    let mut expenses = default_expenses();
    expenses[0].total_cost = 600.0;
    expenses[3].total_cost = 180.5;
    expenses[3].payer_id = Some("att_1".to_string());
    let attendees = reconcile_participation(
        &generate_initial_attendees(4),
        expenses.iter().map(|e| e.id.as_str()),
    );
    EventSnapshot::new(
        EventConfig {
            total_people: 4,
            ..EventConfig::default()
        },
        expenses,
        attendees,
    )
}

#[test]
fn test_missing_file_loads_none() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("event.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("event.json"));
    let snapshot = sample_snapshot();

    store.save(&snapshot).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.compute(), snapshot.compute());
}

#[test]
fn test_saved_file_uses_host_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("event.json");
    let mut store = JsonFileStore::new(&path);
    store.save(&sample_snapshot()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], SNAPSHOT_FORMAT_VERSION);
    assert_eq!(raw["snapshot"]["config"]["totalPeople"], 4);
    assert_eq!(raw["snapshot"]["expenses"][3]["payerId"], "att_1");
    assert_eq!(raw["snapshot"]["attendees"][3]["isHonoree"], true);
}

#[test]
fn test_tampered_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("event.json");
    let mut store = JsonFileStore::new(&path);
    store.save(&sample_snapshot()).unwrap();

    let mut persisted: PersistedSnapshot =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    persisted.snapshot.expenses[0].total_cost = 1.0;
    fs::write(&path, serde_json::to_string(&persisted).unwrap()).unwrap();

    assert!(matches!(store.load(), Err(StoreError::ChecksumMismatch { .. })));
}

#[test]
fn test_unknown_version_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("event.json");
    let snapshot = sample_snapshot();
    let persisted = PersistedSnapshot {
        version: SNAPSHOT_FORMAT_VERSION + 1,
        checksum: compute_snapshot_checksum(&snapshot).unwrap(),
        snapshot,
    };
    fs::write(&path, serde_json::to_string(&persisted).unwrap()).unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(
        store.load(),
        Err(StoreError::UnsupportedVersion { found: 2, expected: 1 })
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("event.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Serialization(_))));
}

#[test]
fn test_invalid_snapshot_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("event.json");
    let mut store = JsonFileStore::new(&path);

    let mut snapshot = sample_snapshot();
    snapshot.attendees.push(Attendee::honoree("att_h2", "Marta"));

    assert!(matches!(
        store.save(&snapshot),
        Err(StoreError::InvalidSnapshot(SnapshotError::MultipleHonorees { .. }))
    ));
    assert!(!path.exists());
}

#[test]
fn test_share_link_round_trip() {
    let snapshot = sample_snapshot();
    let link = ShareLink::from_snapshot(&snapshot, AccessMode::Edit).unwrap();
    let url = format!("https://despedidas.example/#{}", link.token);

    let parsed = ShareLink::parse(&url).unwrap();
    assert_eq!(parsed.access, AccessMode::Edit);
    assert_eq!(parsed.snapshot().unwrap(), snapshot);
}

#[test]
fn test_read_only_flag_among_other_params() {
    let link = ShareLink::from_snapshot(&sample_snapshot(), AccessMode::Edit).unwrap();
    let url = format!("https://despedidas.example/?lang=es&mode=view#{}", link.token);
    assert_eq!(ShareLink::parse(&url).unwrap().access, AccessMode::ReadOnly);
}

#[test]
fn test_share_token_is_url_safe() {
    let link = ShareLink::from_snapshot(&sample_snapshot(), AccessMode::ReadOnly).unwrap();
    assert!(link
        .token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

/// Amounts whose shortest decimal form needs all 17 significant digits
fn awkward_snapshot(cost: f64, unexpected_percent: f64) -> EventSnapshot {
    let mut snapshot = sample_snapshot();
    snapshot.expenses[1].total_cost = cost;
    snapshot.config.unexpected_percent = unexpected_percent;
    snapshot
}

#[test]
fn test_full_precision_amounts_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("event.json"));

    for cost in [0.1 * 12.0 + 0.2, 243638.84714895714, 1.4000000000000001] {
        let snapshot = awkward_snapshot(cost, 0.1 * 3.0);
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.expenses[1].total_cost.to_bits(), cost.to_bits());
        assert_eq!(loaded, snapshot);
    }
}

#[test]
fn test_full_precision_amounts_survive_share_link() {
    let snapshot = awkward_snapshot(243638.84714895714, 0.1 * 3.0);
    let link = ShareLink::from_snapshot(&snapshot, AccessMode::ReadOnly).unwrap();
    assert_eq!(link.snapshot().unwrap(), snapshot);
}

proptest! {
    #[test]
    fn prop_file_store_reloads_exact_amounts(
        cost in 0.0f64..1e9,
        unexpected_percent in 0.0f64..100.0,
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("event.json"));
        let snapshot = awkward_snapshot(cost, unexpected_percent);

        store.save(&snapshot).unwrap();
        let loaded = store.load();
        prop_assert!(loaded.is_ok(), "load failed for cost {}: {:?}", cost, loaded);
        prop_assert_eq!(loaded.unwrap(), Some(snapshot));
    }

    #[test]
    fn prop_share_link_keeps_exact_amounts(
        cost in 0.0f64..1e9,
        unexpected_percent in 0.0f64..100.0,
    ) {
        let snapshot = awkward_snapshot(cost, unexpected_percent);
        let link = ShareLink::from_snapshot(&snapshot, AccessMode::Edit).unwrap();
        let parsed = ShareLink::parse(&link.to_url_suffix()).unwrap();
        prop_assert_eq!(parsed.snapshot().unwrap(), snapshot);
    }
}
