//! Recorder - applies one throw to the sequence and advances the cursor.

use tui_bowling_types::SEQUENCE_DONE;

use crate::grammar::{normalize, role_at};
use crate::sequence::PinSequence;

/// Record one throw token at `cursor`.
///
/// Returns the updated sequence and cursor, or `None` when the token is not
/// legal for the current ball. Rejection leaves the caller's state untouched;
/// the surrounding UI re-prompts.
///
/// Cursor advance:
/// - frames 1-9: a strike consumes both of the frame's slots (+2), any other
///   first ball moves to the second slot (+1), a second ball closes the
///   frame (+1);
/// - slot 18 always moves to 19;
/// - slot 19 moves to 20 when a third ball was earned (ball one was a
///   strike, or ball two spared), otherwise the game ends at 21;
/// - slot 20 always ends the game.
pub fn record(pins: &PinSequence, cursor: u8, token: &str) -> Option<(PinSequence, u8)> {
    if cursor >= SEQUENCE_DONE {
        return None;
    }

    let symbol = normalize(token, role_at(pins, cursor))?;
    let mut next = *pins;
    next.set(cursor as usize, symbol);

    let cursor = match cursor {
        c @ 0..=17 => {
            if c % 2 == 0 && symbol.is_strike() {
                c + 2
            } else {
                c + 1
            }
        }
        18 => 19,
        19 => {
            if pins.slots()[18].is_strike() || symbol.is_spare() {
                20
            } else {
                SEQUENCE_DONE
            }
        }
        _ => SEQUENCE_DONE,
    };

    Some((next, cursor))
}
