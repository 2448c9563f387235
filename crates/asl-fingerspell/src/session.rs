//! One tracked hand, from raw detector output to fingerspelled text.

use std::time::{Duration, Instant};

use asl_fingerspell_classifier::{
    ClassifierError, ClassifierParams, DetectionWatchdog, GestureClassifier, GestureState, Letter,
    StateTransition, Transcript, TranscriptEvent,
};
use asl_fingerspell_core::thresholds::DEFAULT_DETECTION_TIMEOUT;
use asl_fingerspell_core::{
    ConfidenceGate, ConfidenceGateParams, GateError, HandObservation, LandmarkSet,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

fn default_detection_timeout_ms() -> u64 {
    DEFAULT_DETECTION_TIMEOUT.as_millis() as u64
}

/// Settings for a [`HandSession`]. Every field may be omitted in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub gate: ConfidenceGateParams,
    #[serde(default)]
    pub classifier: ClassifierParams,
    /// Time without a usable detection before the classifier is reset.
    #[serde(default = "default_detection_timeout_ms")]
    pub detection_timeout_ms: u64,
    /// Practice letter the transcript compares appended letters against.
    #[serde(default)]
    pub target: Option<Letter>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gate: ConfidenceGateParams::default(),
            classifier: ClassifierParams::default(),
            detection_timeout_ms: default_detection_timeout_ms(),
            target: None,
        }
    }
}

impl SessionConfig {
    pub fn detection_timeout(&self) -> Duration {
        Duration::from_millis(self.detection_timeout_ms)
    }
}

/// What one frame did to the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    /// Classifier transition: a processed frame, or a reset after the
    /// detection timeout. `None` while the hand is missing but the timeout
    /// has not yet passed.
    pub transition: Option<StateTransition>,
    pub transcript: Option<TranscriptEvent>,
    /// Why the observation was not classified, if the gate rejected it.
    pub rejected: Option<GateError>,
}

impl FrameOutcome {
    pub fn state(&self) -> Option<GestureState> {
        self.transition.map(|t| t.current)
    }
}

/// Gate, watchdog, classifier and transcript for one hand.
///
/// Feed every captured frame to [`process`](Self::process) in capture
/// order, with `None` when the detector found no hand.
#[derive(Debug)]
pub struct HandSession {
    gate: ConfidenceGate,
    watchdog: DetectionWatchdog,
    classifier: GestureClassifier,
    transcript: Transcript,
}

impl HandSession {
    /// Build a session whose detection clock starts at `now`.
    pub fn new(config: &SessionConfig, now: Instant) -> Result<Self, ClassifierError> {
        let classifier = GestureClassifier::new(config.classifier.clone())?;
        let mut transcript = Transcript::new();
        transcript.set_target(config.target);
        Ok(Self {
            gate: ConfidenceGate::new(config.gate),
            watchdog: DetectionWatchdog::new(config.detection_timeout(), now),
            classifier,
            transcript,
        })
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Mutable access, e.g. to install a state sink.
    pub fn classifier_mut(&mut self) -> &mut GestureClassifier {
        &mut self.classifier
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn state(&self) -> GestureState {
        self.classifier.state()
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn process(&mut self, observation: Option<&HandObservation>, now: Instant) -> FrameOutcome {
        let accepted = match observation {
            Some(obs) => self.gate.apply(obs).map_err(Some),
            None => Err(None),
        };
        match accepted {
            Ok(set) => self.process_landmarks(&set, now),
            Err(rejected) => {
                if let Some(err) = &rejected {
                    trace!("frame rejected: {err}");
                }
                let mut outcome = self.missed(now);
                outcome.rejected = rejected;
                outcome
            }
        }
    }

    /// Classify an already gated landmark set.
    pub fn process_landmarks(&mut self, set: &LandmarkSet, now: Instant) -> FrameOutcome {
        self.watchdog.observed(now);
        let transition = self.classifier.process_points_set(set);
        self.finish(transition)
    }

    fn missed(&mut self, now: Instant) -> FrameOutcome {
        if !self.watchdog.missed(now) {
            return FrameOutcome::default();
        }
        debug!(
            "no hand for {:?}, resetting classifier",
            self.watchdog.elapsed(now)
        );
        let transition = self.classifier.reset();
        self.finish(transition)
    }

    fn finish(&mut self, transition: StateTransition) -> FrameOutcome {
        let transcript = if transition.notify {
            self.transcript.apply(transition.current)
        } else {
            None
        };
        if let Some(event) = &transcript {
            debug!("transcript {:?} -> {:?}", event, self.transcript.text());
        }
        FrameOutcome {
            transition: Some(transition),
            transcript,
            rejected: None,
        }
    }
}
