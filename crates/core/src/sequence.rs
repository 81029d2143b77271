//! Pin sequence - fixed 21-slot storage for one game's throws.
//!
//! Slots are position-fixed: frame k (1-based, k <= 9) always owns slots
//! `2k-2` and `2k-1`, frame ten owns slots 18-20. A strike leaves its
//! frame's second slot `Pending` forever; nothing ever shifts.

use tui_bowling_types::{Throw, THROW_SLOTS};

/// The recorded throws of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSequence {
    slots: [Throw; THROW_SLOTS],
}

impl PinSequence {
    /// All-pending sequence for a fresh game.
    pub fn new() -> Self {
        Self {
            slots: [Throw::Pending; THROW_SLOTS],
        }
    }

    pub fn from_slots(slots: [Throw; THROW_SLOTS]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Throw; THROW_SLOTS] {
        &self.slots
    }

    /// Get a slot, `None` if out of range.
    pub fn get(&self, idx: usize) -> Option<Throw> {
        self.slots.get(idx).copied()
    }

    /// Set a slot. Returns false (and changes nothing) if out of range.
    pub fn set(&mut self, idx: usize, throw: Throw) -> bool {
        match self.slots.get_mut(idx) {
            Some(slot) => {
                *slot = throw;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Throw> + '_ {
        self.slots.iter().copied()
    }
}

impl Default for PinSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sequence_is_all_pending() {
        let seq = PinSequence::new();
        assert!(seq.iter().all(|t| t.is_pending()));
    }

    #[test]
    fn test_set_and_get_bounds() {
        let mut seq = PinSequence::new();
        assert!(seq.set(0, Throw::Strike));
        assert!(seq.set(20, Throw::Spare));
        assert!(!seq.set(21, Throw::Foul));
        assert_eq!(seq.get(0), Some(Throw::Strike));
        assert_eq!(seq.get(20), Some(Throw::Spare));
        assert_eq!(seq.get(21), None);
    }
}
