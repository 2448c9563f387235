//! High-level facade for the `asl-fingerspell-*` workspace.
//!
//! This crate provides:
//! - re-exports of the landmark geometry ([`core`]) and classifier
//!   ([`classifier`]) crates
//! - [`HandSession`], which takes raw per-frame detector output through the
//!   confidence gate, the classifier and the no-detection watchdog, and
//!   writes committed letters into a transcript
//! - JSON recordings and [`replay`] for offline runs
//!
//! ## Quickstart
//!
//! ```
//! use std::time::{Duration, Instant};
//! use asl_fingerspell::{HandSession, SessionConfig};
//!
//! let t0 = Instant::now();
//! let mut session = HandSession::new(&SessionConfig::default(), t0)?;
//!
//! // no hand for three seconds: the classifier is reset to `Unknown`
//! let outcome = session.process(None, t0 + Duration::from_secs(3));
//! assert!(outcome.transition.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## API map
//! - `asl_fingerspell::core`: joints, landmark sets, confidence gate, predicates.
//! - `asl_fingerspell::classifier`: rules, evidence counters, classifier, transcript.

pub use asl_fingerspell_classifier as classifier;
pub use asl_fingerspell_core as core;

mod io;
mod session;

pub use asl_fingerspell_classifier::{
    ClassifierParams, GestureClassifier, GestureState, Letter, NotifyPolicy, StateTransition,
    TranscriptEvent,
};
pub use asl_fingerspell_core::{HandObservation, Joint, LandmarkSet};
pub use io::{replay, FrameReport, RecordedFrame, ReplayReport, SessionIoError, SessionRecording};
pub use session::{FrameOutcome, HandSession, SessionConfig};

/// Install a `tracing` subscriber and route `log` records into it.
///
/// Safe to call more than once; later calls are ignored. The `log` bridge
/// is installed even when another subscriber was set first.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    asl_fingerspell_core::init_tracing(json);
    let _ = tracing_log::LogTracer::init();
}
