//! Max score projector - the best final score still reachable from a
//! partial sequence.
//!
//! Works on a scratch copy of the sequence so the real record is never
//! touched, then resolves every pending ball as favorably as the rules
//! allow and runs the scorer over the result.

use tui_bowling_types::{Throw, SEQUENCE_DONE, TENTH_FRAME_SLOT, THROW_SLOTS};

use crate::scorer::score;
use crate::sequence::PinSequence;

/// Highest final score reachable by completing the remaining throws
/// optimally. Non-increasing as real throws replace pending ones.
pub fn project_max(pins: &PinSequence, cursor: u8) -> u16 {
    let mut scratch = *pins;

    if cursor < 19 {
        let mut c = cursor as usize;
        // Mid-frame: the best a follow-up ball can do is spare.
        if c % 2 == 1 {
            scratch.set(c, Throw::Spare);
            c += 1;
        }
        // Every remaining full rack falls to a strike; skipped second slots
        // stay pending. Frame ten strikes through.
        for i in c..THROW_SLOTS {
            if i >= TENTH_FRAME_SLOT || i % 2 == 0 {
                scratch.set(i, Throw::Strike);
            }
        }
    } else {
        // Inside frame ten: strike wherever the rack is full, spare the rest.
        for i in cursor as usize..THROW_SLOTS {
            let prior = scratch.slots()[i - 1];
            let best = if prior.is_strike() || prior.is_spare() {
                Throw::Strike
            } else {
                Throw::Spare
            };
            scratch.set(i, best);
        }
    }

    score(&scratch, SEQUENCE_DONE).final_total().unwrap_or(0)
}
