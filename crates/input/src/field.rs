//! Single-line prompt field with a fixed character limit.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

/// Upper bound on any field's capacity; the per-field limit is lower.
const FIELD_CAPACITY: usize = 64;

/// What a key press did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Content changed.
    Edited,
    /// Enter was pressed; read `value()` and `reset()`.
    Submitted,
    /// Key was not for this field.
    Ignored,
}

/// Fixed-capacity text field state.
#[derive(Debug, Clone)]
pub struct TextField {
    chars: ArrayVec<char, FIELD_CAPACITY>,
    limit: usize,
}

impl TextField {
    pub fn new(limit: usize) -> Self {
        Self {
            chars: ArrayVec::new(),
            limit: limit.min(FIELD_CAPACITY),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> FieldEvent {
        match code {
            KeyCode::Enter => FieldEvent::Submitted,
            KeyCode::Backspace => {
                if self.chars.pop().is_some() {
                    FieldEvent::Edited
                } else {
                    FieldEvent::Ignored
                }
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.chars.len() < self.limit {
                    self.chars.push(c);
                    FieldEvent::Edited
                } else {
                    FieldEvent::Ignored
                }
            }
            _ => FieldEvent::Ignored,
        }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn reset(&mut self) {
        self.chars.clear();
    }
}
