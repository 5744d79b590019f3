//! JSON leaderboard file: round-trip, tolerance of missing and corrupt
//! files, and ranking through `record_result`.

mod common;

use std::fs;

use briscola::adapters::leaderboard_json::JsonFileLeaderboard;
use briscola::leaderboard::{record_result, MAX_ENTRIES};
use briscola::{LeaderboardEntry, LeaderboardStore};
use tempfile::TempDir;

fn entry(name: &str, wins: u32, ties: u32, losses: u32, total_points: u32) -> LeaderboardEntry {
    LeaderboardEntry {
        name: name.into(),
        wins,
        ties,
        losses,
        total_points,
        date: "14/10/2026".into(),
    }
}

fn store_in(dir: &TempDir) -> JsonFileLeaderboard {
    JsonFileLeaderboard::new(dir.path().join("briscola_charts.json"))
}

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    assert!(store_in(&dir).load().is_empty());
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{ not json").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let entries = vec![entry("Anna", 2, 1, 0, 210), entry("AI-Bakodu", 3, 0, 0, 260)];
    store.save(&entries).unwrap();
    assert_eq!(store.load(), entries);

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains('\n'), "file is pretty-printed");
    assert!(raw.contains("\"total_points\": 210"));
}

#[test]
fn reads_files_written_with_legacy_keys() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"[{"nome": "Gabry", "wins": 3, "ties": 0, "losses": 1, "punti_totali": 260, "data": "02/10/2025"}]"#,
    )
    .unwrap();
    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Gabry");
    assert_eq!(loaded[0].total_points, 260);
}

#[test]
fn record_result_ranks_and_truncates_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let seed: Vec<_> = (0..MAX_ENTRIES as u32)
        .map(|i| entry(&format!("P{i}"), 1, 0, 0, i))
        .collect();
    store.save(&seed).unwrap();

    record_result(&store, entry("Champion", 6, 0, 0, 400)).unwrap();
    let loaded = store.load();
    assert_eq!(loaded.len(), MAX_ENTRIES);
    assert_eq!(loaded[0].name, "Champion");
    // Lowest card points among the one-win players fell off.
    assert!(!loaded.iter().any(|e| e.name == "P0"));
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileLeaderboard::new(dir.path().join("nope").join("board.json"));
    let err = store.save(&[entry("Anna", 1, 0, 0, 70)]).unwrap_err();
    assert_eq!(err.code(), "IO_ERROR");
}
