//! Wire format - the JSON shape of a persisted record.
//!
//! The shape is fixed for compatibility with existing save files: `pins` is
//! an array of 21 symbol strings, `scores` an array of 11 integers with `-1`
//! for undetermined entries, and the cursor travels as `times`.
//!
//! Decoding is deliberately tolerant: missing fields take zero values and
//! malformed substructures are mapped so the engine's validator repairs
//! them instead of the load failing.

use serde::{Deserialize, Serialize};

use tui_bowling_core::{ArchivedGame, GameRecord, PinSequence, Scoreboard};
use tui_bowling_types::{Throw, PERFECT_SCORE, SCORE_SLOTS, SEQUENCE_DONE, THROW_SLOTS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pins: Vec<String>,
    #[serde(default)]
    pub scores: Vec<i64>,
    #[serde(default, rename = "maxScore")]
    pub max_score: i64,
    #[serde(default)]
    pub times: i64,
    #[serde(default)]
    pub archives: Vec<ArchiveFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveFile {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub pins: Vec<String>,
    #[serde(default)]
    pub scores: Vec<i64>,
}

impl RecordFile {
    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            name: record.name.clone(),
            pins: encode_pins(&record.pins),
            scores: encode_scores(&record.scores),
            max_score: i64::from(record.max_score),
            times: i64::from(record.cursor),
            archives: record
                .archives
                .iter()
                .map(|a| ArchiveFile {
                    time: a.time.clone(),
                    pins: encode_pins(&a.pins),
                    scores: encode_scores(&a.scores),
                })
                .collect(),
        }
    }

    /// Convert to the typed record.
    ///
    /// Returns `false` alongside the record when a pins/scores pair could
    /// not be decoded and was reset - the deserialization half of the
    /// validator's repair. Positional checks still run in the engine.
    pub fn into_record(self) -> (GameRecord, bool) {
        let mut clean = true;

        let (pins, scores, cursor) = match (decode_pins(&self.pins), decode_scores(&self.scores)) {
            (Some(pins), Some(scores)) => (pins, scores, decode_cursor(self.times)),
            _ => {
                clean = false;
                (PinSequence::new(), Scoreboard::fresh(), 0)
            }
        };

        let archives = self
            .archives
            .into_iter()
            .map(|a| {
                match (decode_pins(&a.pins), decode_scores(&a.scores)) {
                    (Some(pins), Some(scores)) => ArchivedGame {
                        time: a.time,
                        pins,
                        scores,
                    },
                    _ => {
                        clean = false;
                        ArchivedGame {
                            time: a.time,
                            pins: PinSequence::new(),
                            scores: Scoreboard::fresh(),
                        }
                    }
                }
            })
            .collect();

        let record = GameRecord {
            name: self.name,
            pins,
            scores,
            max_score: decode_max(self.max_score),
            cursor,
            archives,
        };
        (record, clean)
    }
}

fn encode_pins(pins: &PinSequence) -> Vec<String> {
    pins.iter().map(|t| t.as_symbol().to_string()).collect()
}

fn encode_scores(scores: &Scoreboard) -> Vec<i64> {
    scores
        .slots()
        .iter()
        .map(|entry| entry.map_or(-1, i64::from))
        .collect()
}

fn decode_pins(raw: &[String]) -> Option<PinSequence> {
    if raw.len() != THROW_SLOTS {
        return None;
    }
    let mut slots = [Throw::Pending; THROW_SLOTS];
    for (slot, symbol) in slots.iter_mut().zip(raw) {
        *slot = Throw::from_symbol(symbol)?;
    }
    Some(PinSequence::from_slots(slots))
}

fn decode_scores(raw: &[i64]) -> Option<Scoreboard> {
    if raw.len() != SCORE_SLOTS {
        return None;
    }
    let mut slots = [None; SCORE_SLOTS];
    for (slot, value) in slots.iter_mut().zip(raw) {
        // Negative means undetermined; anything oversized is clamped so the
        // validator's cap check trips.
        *slot = if *value < 0 {
            None
        } else {
            Some(u16::try_from(*value).unwrap_or(u16::MAX))
        };
    }
    Some(Scoreboard::from_slots(slots))
}

// Out-of-range values land just past the validator's limit so the
// whole-record reset fires instead of wrapping silently.
fn decode_cursor(raw: i64) -> u8 {
    u8::try_from(raw).unwrap_or(SEQUENCE_DONE + 1)
}

fn decode_max(raw: i64) -> u16 {
    if (0..=i64::from(PERFECT_SCORE)).contains(&raw) {
        raw as u16
    } else {
        PERFECT_SCORE + 1
    }
}
