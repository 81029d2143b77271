//! Frame scorer - recomputes the cumulative frame scores from the pin
//! sequence, honoring strike/spare lookahead.
//!
//! Scores finalize strictly left to right: a frame whose bonus balls have
//! not been thrown yet is undetermined, and so is everything after it.

use tui_bowling_types::{Throw, SCORE_SLOTS, SEQUENCE_DONE, TENTH_FRAME_SLOT};

use crate::sequence::PinSequence;

/// Cumulative frame scores.
///
/// Index 0 is the sentinel base (always 0 on a fresh board); index k holds
/// the running total through frame k, or `None` while lookahead balls are
/// missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    totals: [Option<u16>; SCORE_SLOTS],
}

impl Scoreboard {
    /// Base 0, everything else undetermined.
    pub fn fresh() -> Self {
        let mut totals = [None; SCORE_SLOTS];
        totals[0] = Some(0);
        Self { totals }
    }

    pub fn from_slots(totals: [Option<u16>; SCORE_SLOTS]) -> Self {
        Self { totals }
    }

    pub fn slots(&self) -> &[Option<u16>; SCORE_SLOTS] {
        &self.totals
    }

    /// Running total through frame k, `None` if undetermined or out of range.
    pub fn frame(&self, k: usize) -> Option<u16> {
        self.totals.get(k).copied().flatten()
    }

    /// The game's final score (frame ten's running total).
    pub fn final_total(&self) -> Option<u16> {
        self.frame(SCORE_SLOTS - 1)
    }

    fn set(&mut self, k: usize, value: Option<u16>) {
        if let Some(slot) = self.totals.get_mut(k) {
            *slot = value;
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Recompute all cumulative scores for the sequence.
pub fn score(pins: &PinSequence, cursor: u8) -> Scoreboard {
    let mut board = Scoreboard::fresh();
    let mut running = Some(0u16);

    for frame in 1..=9 {
        let value = frame_value(pins, (frame - 1) * 2);
        running = add(running, value);
        board.set(frame, running);
    }

    running = add(running, tenth_frame_value(pins, cursor));
    board.set(10, running);
    board
}

fn add(running: Option<u16>, value: Option<u16>) -> Option<u16> {
    Some(running? + value?)
}

/// Value of one of frames 1-9, whose slots start at `slot`.
fn frame_value(pins: &PinSequence, slot: usize) -> Option<u16> {
    let b1 = at(pins, slot);
    let b2 = at(pins, slot + 1);

    if b1.is_strike() {
        return strike_bonus(pins, slot).map(|bonus| 10 + bonus);
    }
    if b2.is_spare() {
        let next = at(pins, slot + 2);
        return if next.is_pending() {
            None
        } else {
            Some(10 + face(next))
        };
    }
    if b1.is_pending() || b2.is_pending() {
        return None;
    }
    Some(face(b1) + face(b2))
}

/// The next two thrown balls after a strike at `slot`, in throw order.
fn strike_bonus(pins: &PinSequence, slot: usize) -> Option<u16> {
    let first = at(pins, slot + 2);
    match first {
        Throw::Pending => None,
        Throw::Strike => {
            // After a double the second bonus ball skips the unused slot,
            // except inside frame ten where balls are consecutive.
            let idx = if slot + 2 >= TENTH_FRAME_SLOT {
                slot + 3
            } else {
                slot + 4
            };
            let second = at(pins, idx);
            if second.is_pending() {
                None
            } else {
                Some(10 + face(second))
            }
        }
        ball => match at(pins, slot + 3) {
            Throw::Pending => None,
            // The pair cleared the rack.
            Throw::Spare => Some(10),
            second => Some(face(ball) + face(second)),
        },
    }
}

/// Frame ten is the plain sum of its balls' faces, with a count absorbed
/// into the spare that follows it. Undetermined until the sub-machine has
/// consumed every ball it asked for.
fn tenth_frame_value(pins: &PinSequence, cursor: u8) -> Option<u16> {
    if cursor < SEQUENCE_DONE {
        return None;
    }
    let balls = [
        at(pins, TENTH_FRAME_SLOT),
        at(pins, TENTH_FRAME_SLOT + 1),
        at(pins, TENTH_FRAME_SLOT + 2),
    ];
    let mut total = 0u16;
    for (i, ball) in balls.iter().enumerate() {
        let absorbed = matches!(ball, Throw::Count(_))
            && balls.get(i + 1).is_some_and(|next| next.is_spare());
        if !absorbed {
            total += tenth_face(*ball);
        }
    }
    Some(total)
}

fn at(pins: &PinSequence, idx: usize) -> Throw {
    pins.get(idx).unwrap_or(Throw::Pending)
}

// Standalone face value of a bonus or open ball. Spares never appear in the
// positions this is applied to; fouls and both zero symbols count nothing.
fn face(throw: Throw) -> u16 {
    match throw {
        Throw::Strike => 10,
        Throw::Count(n) => n as u16,
        _ => 0,
    }
}

// Within frame ten a spare closes its rack at ten, same as a strike.
fn tenth_face(throw: Throw) -> u16 {
    match throw {
        Throw::Strike | Throw::Spare => 10,
        Throw::Count(n) => n as u16,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(symbols: &[&str]) -> (PinSequence, u8) {
        let mut pins = PinSequence::new();
        for (i, s) in symbols.iter().enumerate() {
            pins.set(i, Throw::from_symbol(s).expect(s));
        }
        (pins, symbols.len() as u8)
    }

    #[test]
    fn test_open_frame_scores_without_lookahead() {
        let (pins, cursor) = seq(&["3", "4"]);
        let board = score(&pins, cursor);
        assert_eq!(board.frame(1), Some(7));
        assert_eq!(board.frame(2), None);
    }

    #[test]
    fn test_strike_waits_for_two_balls() {
        let (pins, cursor) = seq(&["X"]);
        assert_eq!(score(&pins, cursor + 1).frame(1), None);

        let (pins, _) = seq(&["X", "yet", "5"]);
        assert_eq!(score(&pins, 4).frame(1), None);

        let (pins, _) = seq(&["X", "yet", "5", "2"]);
        assert_eq!(score(&pins, 4).frame(1), Some(17));
    }

    #[test]
    fn test_strike_followed_by_spare_pair_scores_twenty() {
        let (pins, _) = seq(&["X", "yet", "5", "/", "3"]);
        let board = score(&pins, 5);
        assert_eq!(board.frame(1), Some(20));
        assert_eq!(board.frame(2), Some(33));
    }

    #[test]
    fn test_spare_waits_for_one_ball() {
        let (pins, _) = seq(&["6", "/"]);
        assert_eq!(score(&pins, 2).frame(1), None);

        let (pins, _) = seq(&["6", "/", "7"]);
        assert_eq!(score(&pins, 3).frame(1), Some(17));
    }

    #[test]
    fn test_double_strike_reads_past_the_skipped_slot() {
        let (pins, _) = seq(&["X", "yet", "X", "yet", "4"]);
        let board = score(&pins, 5);
        assert_eq!(board.frame(1), Some(24));
        assert_eq!(board.frame(2), None);
    }

    #[test]
    fn test_foul_and_zero_symbols_count_nothing() {
        let (pins, _) = seq(&["G", "4", "F", "-"]);
        let board = score(&pins, 4);
        assert_eq!(board.frame(1), Some(4));
        assert_eq!(board.frame(2), Some(4));
    }

    #[test]
    fn test_tenth_frame_undetermined_until_complete() {
        let symbols: Vec<&str> = (0..18)
            .map(|i| if i % 2 == 0 { "G" } else { "-" })
            .chain(["4", "/"])
            .collect();
        let (mut pins, _) = seq(&symbols);
        assert_eq!(score(&pins, 20).frame(10), None);

        pins.set(20, Throw::Count(5));
        assert_eq!(score(&pins, 21).frame(10), Some(15));
    }

    #[test]
    fn test_tenth_frame_count_absorbed_by_following_spare() {
        let symbols: Vec<&str> = (0..18)
            .map(|i| if i % 2 == 0 { "G" } else { "-" })
            .chain(["4", "/", "X"])
            .collect();
        let (pins, _) = seq(&symbols);
        assert_eq!(score(&pins, 21).frame(10), Some(20));
    }

    #[test]
    fn test_tenth_frame_open_pair_sums_faces() {
        let symbols: Vec<&str> = (0..18)
            .map(|i| if i % 2 == 0 { "G" } else { "-" })
            .chain(["4", "3"])
            .collect();
        let (pins, _) = seq(&symbols);
        assert_eq!(score(&pins, 21).frame(10), Some(7));
    }
}
