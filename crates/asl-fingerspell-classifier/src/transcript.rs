//! Fingerspelled text built from notified states.

use serde::{Deserialize, Serialize};

use crate::state::{GestureState, Letter};

/// Change made to a [`Transcript`] by one state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum TranscriptEvent {
    Appended {
        ch: char,
        /// The appended letter is the current practice target.
        matches_target: bool,
    },
    Cleared,
}

/// Accumulates committed letters and spaces into text.
///
/// A committed letter or space is appended once and then latched, so the
/// same gesture held over many frames writes one character. The latch is
/// released when the hand goes apart or tracking is lost. Transitional
/// states pass through without effect, so a new letter must be preceded by
/// an apart or unknown state to be written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
    latched: bool,
    target: Option<Letter>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> Option<Letter> {
        self.target
    }

    /// Set the practice letter appended letters are compared against.
    pub fn set_target(&mut self, target: Option<Letter>) {
        self.target = target;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn apply(&mut self, state: GestureState) -> Option<TranscriptEvent> {
        match state {
            GestureState::Letter(letter) => {
                let matches_target = self.target == Some(letter);
                self.append(letter.as_char(), matches_target)
            }
            GestureState::Spacebar => self.append(' ', false),
            GestureState::Clear => {
                self.text.clear();
                Some(TranscriptEvent::Cleared)
            }
            GestureState::Apart | GestureState::Unknown => {
                self.latched = false;
                None
            }
            GestureState::PossibleLetter
            | GestureState::PossiblePinch
            | GestureState::PossibleApart => None,
        }
    }

    fn append(&mut self, ch: char, matches_target: bool) -> Option<TranscriptEvent> {
        if self.latched {
            return None;
        }
        self.latched = true;
        self.text.push(ch);
        Some(TranscriptEvent::Appended { ch, matches_target })
    }
}
