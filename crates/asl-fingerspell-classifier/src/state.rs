//! Recognised letters and the states the classifier reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static fingerspelling letters. Z needs motion and is not recognised.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
}

impl Letter {
    pub const ALL: [Letter; 25] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
        Letter::K,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::P,
        Letter::Q,
        Letter::R,
        Letter::S,
        Letter::T,
        Letter::U,
        Letter::V,
        Letter::W,
        Letter::X,
        Letter::Y,
    ];

    /// Upper-case ASCII character for this letter.
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Counter that accumulates evidence for this letter.
    ///
    /// O, T, N, S, M and Q count on the pinch counter; every other letter
    /// on the letter counter.
    pub const fn evidence_family(self) -> EvidenceFamily {
        match self {
            Letter::M | Letter::N | Letter::O | Letter::Q | Letter::S | Letter::T => {
                EvidenceFamily::Pinch
            }
            _ => EvidenceFamily::Letter,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A character that is not one of the recognised letters.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("'{0}' is not a recognised fingerspelling letter")]
pub struct UnknownLetter(pub char);

impl TryFrom<char> for Letter {
    type Error = UnknownLetter;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        Letter::ALL
            .iter()
            .copied()
            .find(|l| l.as_char() == upper)
            .ok_or(UnknownLetter(c))
    }
}

/// The three evidence counters a candidate can accumulate on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceFamily {
    Letter,
    Pinch,
    Apart,
}

/// The classifier's reported state.
///
/// `Clear` and `PossiblePinch` are part of the state vocabulary consumed by
/// downstream text handling; the decision rules never produce them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    Letter(Letter),
    PossibleLetter,
    Clear,
    Spacebar,
    PossiblePinch,
    PossibleApart,
    Apart,
    #[default]
    Unknown,
}

impl GestureState {
    /// A settled, non-transitional state: a letter, spacebar, clear or apart.
    pub fn is_committed(self) -> bool {
        matches!(
            self,
            GestureState::Letter(_) | GestureState::Spacebar | GestureState::Clear | GestureState::Apart
        )
    }

    /// One of the "possible" states emitted while evidence accumulates.
    pub fn is_transitional(self) -> bool {
        matches!(
            self,
            GestureState::PossibleLetter | GestureState::PossiblePinch | GestureState::PossibleApart
        )
    }

    pub fn letter(self) -> Option<Letter> {
        match self {
            GestureState::Letter(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Letter> for GestureState {
    fn from(letter: Letter) -> Self {
        GestureState::Letter(letter)
    }
}

impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureState::Letter(l) => write!(f, "{l}"),
            GestureState::PossibleLetter => f.write_str("possible letter"),
            GestureState::Clear => f.write_str("clear"),
            GestureState::Spacebar => f.write_str("spacebar"),
            GestureState::PossiblePinch => f.write_str("possible pinch"),
            GestureState::PossibleApart => f.write_str("possible apart"),
            GestureState::Apart => f.write_str("apart"),
            GestureState::Unknown => f.write_str("unknown"),
        }
    }
}
