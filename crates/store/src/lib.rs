//! Persistence - JSON save files in the fixed on-disk format.
//!
//! One file per player under `data/`, pretty-printed with two-space indent.
//! The engine never touches the file system; this crate is the single
//! persistence collaborator.

pub mod wire;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use tui_bowling_core::GameRecord;

use crate::wire::RecordFile;

/// Directory the save files live in, relative to the working directory.
pub const DATA_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create {dir}: {source}")]
    CreateDir {
        dir: String,
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Write the record to `<dir>/<name>.json`, creating the directory first.
pub fn save(record: &GameRecord, dir: &Path) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
        dir: dir.display().to_string(),
        source,
    })?;

    let path = dir.join(format!("{}.json", record.name));
    let json = serde_json::to_string_pretty(&RecordFile::from_record(record))?;
    fs::write(&path, json).map_err(|source| StoreError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

/// Read and decode one save file.
///
/// The boolean is false when a malformed pins/scores pair had to be reset
/// during decoding; the caller should treat the record as repaired (log,
/// rescore). Structural invariants are the engine validator's job.
pub fn load(path: &Path) -> Result<(GameRecord, bool), StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file: RecordFile = serde_json::from_str(&text).map_err(|source| StoreError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    Ok(file.into_record())
}

/// Save files under `dir`, alphabetically.
pub fn list_saves(dir: &Path) -> Vec<PathBuf> {
    let pattern = dir.join("*.json");
    match glob::glob(&pattern.to_string_lossy()) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tui_bowling_core::ThrowOutcome;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("tui-bowling-store-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = temp_dir("roundtrip");
        let mut record = GameRecord::fresh("lane7");
        for token in ["10", "7", "/"] {
            assert_eq!(record.record_throw(token), ThrowOutcome::Recorded);
        }

        let path = save(&record, &dir).expect("save");
        assert_eq!(path, dir.join("lane7.json"));

        let (loaded, clean) = load(&path).expect("load");
        assert!(clean);
        assert_eq!(loaded, record);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_saves_finds_only_json() {
        let dir = temp_dir("list");
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join("a.json"), "{}").expect("write");
        fs::write(dir.join("b.txt"), "x").expect("write");

        let saves = list_saves(&dir);
        assert_eq!(saves, vec![dir.join("a.json")]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_surfaces_decode_errors() {
        let dir = temp_dir("decode");
        fs::create_dir_all(&dir).expect("mkdir");
        let path = dir.join("broken.json");
        fs::write(&path, "not json").expect("write");

        assert!(matches!(load(&path), Err(StoreError::Decode { .. })));

        let _ = fs::remove_dir_all(&dir);
    }
}
