//! Hand-landmark geometry for fingerspelling recognition.
//!
//! This crate holds the vocabulary shared by the classifier and the
//! session facade: the 21 named hand joints, a validated [`LandmarkSet`],
//! the confidence gate that turns raw detector output into one, and the
//! pure geometric predicates the letter rules are built from. It has no
//! notion of letters, counters or time.
//!
//! Coordinates are 2-D with Y growing downward, so "up" means decreasing y.

mod gate;
mod landmarks;
mod logger;
pub mod predicates;
pub mod thresholds;

pub use gate::{ConfidenceGate, ConfidenceGateParams, GateError, HandObservation, ObservedLandmark};
pub use landmarks::{Finger, Joint, LandmarkError, LandmarkSet, Point, LANDMARK_COUNT};

#[cfg(feature = "tracing")]
pub use logger::{init_tracing, DEFAULT_TRACING_FILTER};

pub use logger::init_with_level;
