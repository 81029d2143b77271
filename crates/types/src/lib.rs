//! Shared types module - throw symbols and scoring constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (scoring engine, UI rendering, persistence).
//!
//! # Sequence layout
//!
//! A game is recorded as a fixed sequence of 21 throw slots:
//!
//! - Frames 1-9 own two slots each: frame k uses slots `2k-2` and `2k-1`.
//!   A strike fills the first slot and leaves the second one `Pending`.
//! - Frame 10 owns slots 18-20 and takes two or three balls depending on
//!   whether a bonus ball was earned.
//!
//! The *cursor* is the index of the next unthrown slot; `21` means the game
//! is complete.
//!
//! # Symbols
//!
//! Each slot holds one symbol, written with the same one-character notation
//! used on the persisted score sheet:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | (blank, wire `yet`) | slot not thrown yet |
//! | `X` | strike |
//! | `/` | spare |
//! | `G` | zero pins on a full rack (gutter ball) |
//! | `-` | zero pins on a follow-up ball that was not a spare |
//! | `F` | foul (counts as zero pins, still consumes the ball) |
//! | `1`..`9` | open count |
//!
//! The two zero symbols are distinct on purpose: scoring and validation
//! branch on ball position, not on the number of pins.
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::Throw;
//!
//! assert_eq!(Throw::from_symbol("X"), Some(Throw::Strike));
//! assert_eq!(Throw::from_symbol("7"), Some(Throw::Count(7)));
//! assert_eq!(Throw::Count(7).as_symbol(), "7");
//! assert_eq!(Throw::from_symbol("0"), None); // zeros are stored as G or -
//! ```

/// Number of throw slots in one game.
pub const THROW_SLOTS: usize = 21;

/// Number of cumulative score slots (index 0 is the sentinel base).
pub const SCORE_SLOTS: usize = 11;

/// Number of frames in one game.
pub const FRAMES: usize = 10;

/// First slot of the tenth frame.
pub const TENTH_FRAME_SLOT: usize = 18;

/// Cursor value once every required ball has been thrown.
pub const SEQUENCE_DONE: u8 = THROW_SLOTS as u8;

/// Pins standing on a full rack.
pub const PIN_COUNT: u8 = 10;

/// Highest achievable final score.
pub const PERFECT_SCORE: u16 = 300;

/// Largest amount a single frame can add to the running total.
pub const MAX_FRAME_GAIN: u16 = 30;

/// Character limit of the player-name prompt.
pub const NAME_INPUT_LIMIT: usize = 37;

/// Character limit of the throw prompt ("10" is the longest token).
pub const THROW_INPUT_LIMIT: usize = 2;

/// Archived games shown per pager page.
pub const ARCHIVES_PER_PAGE: usize = 3;

/// One recorded (or not-yet-recorded) ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Throw {
    /// Slot not thrown yet.
    Pending,
    /// All ten pins on a full rack.
    Strike,
    /// Remaining pins cleared on a follow-up ball.
    Spare,
    /// Zero pins on a full rack.
    Gutter,
    /// Zero pins on a follow-up ball that did not spare.
    Miss,
    /// Foul ball - zero pins, ball consumed.
    Foul,
    /// Open count, 1..=9 pins.
    Count(u8),
}

impl Throw {
    /// Parse a stored symbol.
    ///
    /// Accepts exactly the canonical symbol set (plus the `yet` sentinel the
    /// wire format uses for pending slots). Anything else - including a bare
    /// `0`, which the recorder never produces - is `None`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "yet" => Some(Throw::Pending),
            "X" => Some(Throw::Strike),
            "/" => Some(Throw::Spare),
            "G" => Some(Throw::Gutter),
            "-" => Some(Throw::Miss),
            "F" => Some(Throw::Foul),
            _ => {
                let n: u8 = s.parse().ok()?;
                if (1..=9).contains(&n) {
                    Some(Throw::Count(n))
                } else {
                    None
                }
            }
        }
    }

    /// Canonical stored symbol.
    pub fn as_symbol(&self) -> &'static str {
        match self {
            Throw::Pending => "yet",
            Throw::Strike => "X",
            Throw::Spare => "/",
            Throw::Gutter => "G",
            Throw::Miss => "-",
            Throw::Foul => "F",
            Throw::Count(n) => match n {
                1 => "1",
                2 => "2",
                3 => "3",
                4 => "4",
                5 => "5",
                6 => "6",
                7 => "7",
                8 => "8",
                _ => "9",
            },
        }
    }

    /// Single character drawn on the score sheet (pending slots are blank).
    pub fn sheet_char(&self) -> char {
        match self {
            Throw::Pending => ' ',
            other => other.as_symbol().chars().next().unwrap_or(' '),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Throw::Pending)
    }

    pub fn is_strike(&self) -> bool {
        matches!(self, Throw::Strike)
    }

    pub fn is_spare(&self) -> bool {
        matches!(self, Throw::Spare)
    }
}
