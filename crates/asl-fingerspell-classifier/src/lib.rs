//! Rule-based fingerspelling classifier built on `asl-fingerspell-core`.
//!
//! ## Quickstart
//!
//! ```
//! use asl_fingerspell_classifier::{ClassifierParams, GestureClassifier, GestureState};
//! use asl_fingerspell_core::{LandmarkSet, Point};
//!
//! let mut classifier = GestureClassifier::new(ClassifierParams::default())?
//!     .with_sink(|state| println!("state: {state}"));
//!
//! let hand = LandmarkSet::from_fn(|_| Point::new(0.5, 0.5))?;
//! let transition = classifier.process_points_set(&hand);
//! assert_eq!(transition.current, GestureState::PossibleApart);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Per frame:
//! 1. Evaluate every geometric predicate into [`HandFacts`].
//! 2. Walk [`LETTER_RULES`] in priority order; the first guard that holds
//!    picks a [`Candidate`], or holds the current state when its family
//!    has no matching letter.
//! 3. Accumulate evidence for the candidate on its family counter.
//! 4. Report the letter once the counter reaches the trigger, a "possible"
//!    state before that.

mod classifier;
mod error;
mod evidence;
mod facts;
mod params;
mod rules;
mod state;
mod transcript;
mod watchdog;

pub use classifier::{GestureClassifier, StateSink, StateTransition};
pub use error::ClassifierError;
pub use evidence::{EvidenceCounters, EvidenceTracker};
pub use facts::{FingerPose, HandFacts};
pub use params::{ClassifierParams, NotifyPolicy};
pub use rules::{decide, Candidate, Decision, Rule, LETTER_RULES, SPACEBAR_RULE};
pub use state::{EvidenceFamily, GestureState, Letter, UnknownLetter};
pub use transcript::{Transcript, TranscriptEvent};
pub use watchdog::DetectionWatchdog;
