//! Game record - the engine's single mutable value.
//!
//! Ties the pure pieces together: one record owns the pin sequence, the
//! cumulative scores, the projected max and the archive of finished games.
//! Every accepted throw recomputes scores and projection; everything else
//! is bookkeeping.

use tui_bowling_types::{PERFECT_SCORE, SEQUENCE_DONE};

use crate::projector::project_max;
use crate::recorder;
use crate::scorer::{score, Scoreboard};
use crate::sequence::PinSequence;
use crate::validate::{self, RepairReport};

/// Result of submitting one throw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ThrowOutcome {
    /// Sequence advanced; scores and projection are up to date.
    Recorded,
    /// Token illegal for the current ball; nothing changed. Re-prompt.
    Rejected,
}

/// Immutable snapshot of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedGame {
    pub time: String,
    pub pins: PinSequence,
    pub scores: Scoreboard,
}

/// One player's record: the game in progress plus everything archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub name: String,
    pub pins: PinSequence,
    pub scores: Scoreboard,
    pub max_score: u16,
    pub cursor: u8,
    pub archives: Vec<ArchivedGame>,
}

impl GameRecord {
    /// Fresh record: all pending, perfect projection, empty archive.
    pub fn fresh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pins: PinSequence::new(),
            scores: Scoreboard::fresh(),
            max_score: PERFECT_SCORE,
            cursor: 0,
            archives: Vec::new(),
        }
    }

    /// Apply a typed name: empty input keeps the current (default) name,
    /// anything else is sanitized of path-unsafe characters.
    pub fn set_name(&mut self, input: &str) {
        if !input.is_empty() {
            self.name = sanitize_name(input);
        }
    }

    /// Submit one throw token at the cursor.
    pub fn record_throw(&mut self, token: &str) -> ThrowOutcome {
        match recorder::record(&self.pins, self.cursor, token) {
            Some((pins, cursor)) => {
                self.pins = pins;
                self.cursor = cursor;
                self.rescore();
                ThrowOutcome::Recorded
            }
            None => ThrowOutcome::Rejected,
        }
    }

    /// Recompute cumulative scores and the projection from the sequence.
    pub fn rescore(&mut self) {
        self.scores = score(&self.pins, self.cursor);
        self.max_score = project_max(&self.pins, self.cursor);
    }

    /// Every required ball has been thrown.
    pub fn is_complete(&self) -> bool {
        self.cursor >= SEQUENCE_DONE
    }

    /// Snapshot the finished game into the archive and start a fresh one.
    /// `stamp` is the archive's display timestamp, supplied by the caller.
    pub fn archive_and_reset(&mut self, stamp: &str) {
        self.archives.push(ArchivedGame {
            time: stamp.to_string(),
            pins: self.pins,
            scores: self.scores,
        });
        self.pins = PinSequence::new();
        self.scores = Scoreboard::fresh();
        self.max_score = PERFECT_SCORE;
        self.cursor = 0;
    }

    /// Validate and repair a reloaded record. See [`validate::repair`].
    pub fn repair(&mut self, fallback_name: &str) -> RepairReport {
        validate::repair(self, fallback_name)
    }
}

/// Replace characters that cannot appear in a file name with `-`.
pub fn sanitize_name(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bowling_types::Throw;

    #[test]
    fn test_fresh_record_defaults() {
        let record = GameRecord::fresh("lane one");
        assert_eq!(record.max_score, 300);
        assert_eq!(record.cursor, 0);
        assert_eq!(record.scores.frame(0), Some(0));
        assert_eq!(record.scores.final_total(), None);
        assert!(record.archives.is_empty());
    }

    #[test]
    fn test_recorded_throw_updates_scores_and_projection() {
        let mut record = GameRecord::fresh("p");
        assert_eq!(record.record_throw("7"), ThrowOutcome::Recorded);
        assert_eq!(record.record_throw("2"), ThrowOutcome::Recorded);
        assert_eq!(record.scores.frame(1), Some(9));
        assert!(record.max_score < 300);
    }

    #[test]
    fn test_rejected_throw_changes_nothing() {
        let mut record = GameRecord::fresh("p");
        let _ = record.record_throw("7");
        let before = record.clone();
        assert_eq!(record.record_throw("9"), ThrowOutcome::Rejected);
        assert_eq!(record, before);
    }

    #[test]
    fn test_archive_and_reset_snapshots_the_game() {
        let mut record = GameRecord::fresh("p");
        for _ in 0..10 {
            let _ = record.record_throw("4");
            let _ = record.record_throw("3");
        }
        assert!(record.is_complete());

        record.archive_and_reset("2026/08/08 19:00:00 +0900");
        assert_eq!(record.archives.len(), 1);
        assert_eq!(record.archives[0].scores.final_total(), Some(70));
        assert_eq!(record.archives[0].pins.get(0), Some(Throw::Count(4)));
        assert_eq!(record.cursor, 0);
        assert_eq!(record.max_score, 300);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_set_name_sanitizes_path_unsafe_characters() {
        let mut record = GameRecord::fresh("20260808-190000");
        record.set_name("a/b:c?d");
        assert_eq!(record.name, "a-b-c-d");

        record.set_name("");
        assert_eq!(record.name, "a-b-c-d");
    }
}
