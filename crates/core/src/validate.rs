//! Load-time validation and repair.
//!
//! A reloaded record is never rejected wholesale: each check resets the
//! smallest substructure it can. Pins and scores are interdependent, so a
//! failure in either resets the pair (and the cursor, which indexes into
//! the pins). A broken name, max score or cursor leaves nothing to anchor
//! the record to and replaces it with a fresh default.

use tui_bowling_types::{Throw, MAX_FRAME_GAIN, PERFECT_SCORE, SEQUENCE_DONE, THROW_SLOTS};

use crate::record::GameRecord;
use crate::scorer::Scoreboard;
use crate::sequence::PinSequence;

/// What `repair` had to touch. All-false means the record was already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepairReport {
    /// Whole record replaced with a fresh default (archives dropped).
    pub record_reset: bool,
    /// Current pins/scores pair (and cursor) reset.
    pub current_reset: bool,
    /// Archives whose pins/scores pair was reset.
    pub archives_reset: usize,
}

impl RepairReport {
    pub fn untouched(&self) -> bool {
        !self.record_reset && !self.current_reset && self.archives_reset == 0
    }
}

/// Check every invariant and repair in place.
///
/// `fallback_name` names the fresh default used when the whole record must
/// be replaced; the engine never reads a clock, so the caller supplies it.
/// Applying `repair` to an already-valid record is a no-op.
pub fn repair(record: &mut GameRecord, fallback_name: &str) -> RepairReport {
    let mut report = RepairReport::default();

    if record.name.is_empty()
        || record.max_score > PERFECT_SCORE
        || record.cursor > SEQUENCE_DONE
    {
        *record = GameRecord::fresh(fallback_name);
        report.record_reset = true;
        return report;
    }

    if !pins_legal(&record.pins) || !scores_plausible(&record.scores) {
        record.pins = PinSequence::new();
        record.scores = Scoreboard::fresh();
        record.cursor = 0;
        report.current_reset = true;
    }

    for archive in &mut record.archives {
        if !pins_legal(&archive.pins) || !scores_plausible(&archive.scores) {
            archive.pins = PinSequence::new();
            archive.scores = Scoreboard::fresh();
            report.archives_reset += 1;
        }
    }

    report
}

/// Every slot's symbol must be legal for its position role; `Pending` is
/// always allowed, and open counts are position-independent.
pub fn pins_legal(pins: &PinSequence) -> bool {
    (0..THROW_SLOTS).all(|i| slot_legal(pins, i))
}

fn slot_legal(pins: &PinSequence, idx: usize) -> bool {
    let slots = pins.slots();
    match slots[idx] {
        Throw::Pending | Throw::Count(_) => true,
        symbol => {
            let full_rack = match idx {
                19 => slots[18].is_strike(),
                20 => slots[19].is_strike() || slots[19].is_spare(),
                _ => idx % 2 == 0,
            };
            if full_rack {
                matches!(symbol, Throw::Strike | Throw::Gutter | Throw::Foul)
            } else {
                matches!(symbol, Throw::Spare | Throw::Miss | Throw::Foul)
            }
        }
    }
}

/// Defined cumulative entries must be non-decreasing and can never exceed
/// thirty points per frame above the base.
pub fn scores_plausible(scores: &Scoreboard) -> bool {
    let mut prev = 0u16;
    for (k, entry) in scores.slots().iter().enumerate() {
        if let Some(v) = entry {
            if *v < prev || u32::from(*v) > u32::from(MAX_FRAME_GAIN) * k as u32 {
                return false;
            }
            prev = *v;
        }
    }
    true
}
