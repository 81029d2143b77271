//! Throw grammar - which input tokens are legal for each ball, and the
//! canonical symbol they normalize to.
//!
//! Every ball in a game is thrown in one of two situations: at a full rack
//! (first ball of a frame, or a tenth-frame ball after a strike/spare
//! cleared the deck) or at whatever the prior ball left standing. Modeling
//! the role explicitly keeps illegal combinations - a spare marker on a
//! full rack, a count larger than the standing pins - unrepresentable
//! downstream: the recorder only ever stores what `normalize` accepted.

use tui_bowling_types::{Throw, PIN_COUNT, TENTH_FRAME_SLOT};

use crate::sequence::PinSequence;

/// Position role of the ball about to be thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallRole {
    /// Ten pins standing.
    FullRack,
    /// Thrown at the pins `prior` left standing.
    FollowUp { prior: Throw },
}

/// Role of the ball at `cursor`.
///
/// For frames 1-9 the role follows slot parity; within frame ten it depends
/// on what the earlier tenth-frame balls were. `cursor` must be below 21.
pub fn role_at(pins: &PinSequence, cursor: u8) -> BallRole {
    let slots = pins.slots();
    match cursor as usize {
        19 => {
            if slots[TENTH_FRAME_SLOT].is_strike() {
                BallRole::FullRack
            } else {
                BallRole::FollowUp {
                    prior: slots[TENTH_FRAME_SLOT],
                }
            }
        }
        20 => {
            let second = slots[19];
            if second.is_strike() || second.is_spare() {
                BallRole::FullRack
            } else {
                BallRole::FollowUp { prior: second }
            }
        }
        c if c % 2 == 0 => BallRole::FullRack,
        c => BallRole::FollowUp {
            prior: slots[c - 1],
        },
    }
}

/// Normalize one input token for the given role.
///
/// Numeric tokens are pin counts; `10` (or a count equal to the standing
/// pins on a follow-up) collapses to the strike/spare symbol. Letter tokens
/// are case-insensitive. Returns `None` for anything inconsistent with the
/// role - the throw is rejected, not recorded.
pub fn normalize(token: &str, role: BallRole) -> Option<Throw> {
    let token = token.trim();
    if let Ok(n) = token.parse::<u8>() {
        return normalize_count(n, role);
    }
    match role {
        BallRole::FullRack => {
            if token.eq_ignore_ascii_case("x") {
                Some(Throw::Strike)
            } else if token.eq_ignore_ascii_case("g") || token == "-" {
                Some(Throw::Gutter)
            } else if token.eq_ignore_ascii_case("f") {
                Some(Throw::Foul)
            } else {
                None
            }
        }
        BallRole::FollowUp { .. } => {
            if token == "/" {
                Some(Throw::Spare)
            } else if token.eq_ignore_ascii_case("g") || token == "-" {
                Some(Throw::Miss)
            } else if token.eq_ignore_ascii_case("f") {
                Some(Throw::Foul)
            } else {
                None
            }
        }
    }
}

fn normalize_count(n: u8, role: BallRole) -> Option<Throw> {
    match role {
        BallRole::FullRack => match n {
            0 => Some(Throw::Gutter),
            1..=9 => Some(Throw::Count(n)),
            10 => Some(Throw::Strike),
            _ => None,
        },
        BallRole::FollowUp { prior } => {
            let remaining = PIN_COUNT - knocked_down(prior);
            if n > remaining {
                None
            } else if n == remaining {
                Some(Throw::Spare)
            } else if n == 0 {
                Some(Throw::Miss)
            } else {
                Some(Throw::Count(n))
            }
        }
    }
}

// A follow-up ball never trails a strike, so only open counts leave pins
// down; fouls and both zero symbols leave the full rack standing.
fn knocked_down(prior: Throw) -> u8 {
    match prior {
        Throw::Count(n) => n,
        _ => 0,
    }
}
