//! Persistence wire-format compatibility.

use std::fs;
use std::path::PathBuf;

use tui_bowling::core::{GameRecord, ThrowOutcome};
use tui_bowling::store::{self, wire::RecordFile};
use tui_bowling::types::Throw;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tui-bowling-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_serialized_shape_matches_the_legacy_fields() {
    let file = RecordFile::from_record(&GameRecord::fresh("p"));
    let value = serde_json::to_value(&file).expect("encode");

    assert_eq!(value["name"], "p");
    assert_eq!(value["maxScore"], 300);
    assert_eq!(value["times"], 0);
    assert_eq!(value["pins"].as_array().map(Vec::len), Some(21));
    assert_eq!(value["scores"].as_array().map(Vec::len), Some(11));
    assert_eq!(value["pins"][0], "yet");
    assert_eq!(value["scores"][0], 0);
    assert_eq!(value["scores"][1], -1);
    assert!(value["archives"].as_array().is_some());
}

#[test]
fn test_legacy_file_parses_into_a_record() {
    let mut pins = vec!["yet"; 21];
    pins[0] = "X";
    pins[2] = "7";
    pins[3] = "/";
    let json = serde_json::json!({
        "name": "turkey",
        "pins": pins,
        "scores": [0, 20, -1, -1, -1, -1, -1, -1, -1, -1, -1],
        "maxScore": 280,
        "times": 4,
        "archives": [],
    });

    let file: RecordFile = serde_json::from_value(json).expect("decode");
    let (record, clean) = file.into_record();
    assert!(clean);
    assert_eq!(record.name, "turkey");
    assert_eq!(record.cursor, 4);
    assert_eq!(record.max_score, 280);
    assert_eq!(record.pins.get(0), Some(Throw::Strike));
    assert_eq!(record.pins.get(3), Some(Throw::Spare));
    assert_eq!(record.scores.frame(1), Some(20));
    assert_eq!(record.scores.frame(2), None);
}

#[test]
fn test_missing_fields_default_and_repair_resets() {
    let file: RecordFile = serde_json::from_str("{}").expect("decode");
    let (mut record, clean) = file.into_record();
    // Empty arrays decode as a reset pins/scores pair.
    assert!(!clean);

    let report = record.repair("fallback");
    assert!(report.record_reset); // empty name
    assert_eq!(record.name, "fallback");
}

#[test]
fn test_unknown_symbols_reset_on_load() {
    let mut file = RecordFile::from_record(&GameRecord::fresh("p"));
    file.pins[0] = "banana".into();
    let (record, clean) = file.into_record();
    assert!(!clean);
    assert!(record.pins.iter().all(|t| t.is_pending()));
    assert_eq!(record.name, "p");
}

#[test]
fn test_save_load_round_trip_with_archives() {
    let dir = temp_dir("roundtrip");

    let mut record = GameRecord::fresh("league night");
    for _ in 0..12 {
        let _ = record.record_throw("x");
    }
    record.archive_and_reset("2026/08/08 19:00:00 +0900");
    for token in ["8", "/", "f"] {
        assert_eq!(record.record_throw(token), ThrowOutcome::Recorded);
    }

    let path = store::save(&record, &dir).expect("save");
    let (loaded, clean) = store::load(&path).expect("load");
    assert!(clean);
    assert_eq!(loaded, record);

    // A freshly saved record needs no repair.
    let mut loaded = loaded;
    assert!(loaded.repair("fallback").untouched());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_list_saves_only_sees_json_files() {
    let dir = temp_dir("list");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("one.json"), "{}").expect("write");
    fs::write(dir.join("two.json"), "{}").expect("write");
    fs::write(dir.join("note.txt"), "x").expect("write");

    let saves = store::list_saves(&dir);
    assert_eq!(saves.len(), 2);
    assert!(saves.iter().all(|p| p.extension().is_some_and(|e| e == "json")));

    let _ = fs::remove_dir_all(&dir);
}
