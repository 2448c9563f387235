//! Confidence gate between a hand-landmark detector and the classifier.
//!
//! A detector reports each joint with a confidence score. The gate turns a
//! raw [`HandObservation`] into a complete [`LandmarkSet`] or rejects the
//! frame; a rejected frame must be treated as "no hand this frame", never
//! partially classified.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::landmarks::{Finger, Joint, LandmarkError, LandmarkSet, Point, LANDMARK_COUNT};
use crate::thresholds::{JOINT_CONFIDENCE_MIN, TIP_CONFIDENCE_MIN};

/// One detected joint as reported by the landmark source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservedLandmark {
    pub location: Point,
    pub confidence: f32,
}

/// Raw per-frame detector output: any subset of the 21 joints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandObservation {
    pub landmarks: BTreeMap<Joint, ObservedLandmark>,
}

impl HandObservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observation where every joint of `set` is reported with `confidence`.
    pub fn from_landmarks(set: &LandmarkSet, confidence: f32) -> Self {
        let landmarks = Joint::ALL
            .iter()
            .map(|&joint| {
                (
                    joint,
                    ObservedLandmark {
                        location: set.point(joint),
                        confidence,
                    },
                )
            })
            .collect();
        Self { landmarks }
    }

    pub fn insert(&mut self, joint: Joint, location: Point, confidence: f32) {
        self.landmarks.insert(
            joint,
            ObservedLandmark {
                location,
                confidence,
            },
        );
    }

    pub fn get(&self, joint: Joint) -> Option<&ObservedLandmark> {
        self.landmarks.get(&joint)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Confidence floors and coordinate handling for the gate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceGateParams {
    /// Floor for the wrist and the five fingertips (exclusive).
    pub tip_min_confidence: f32,
    /// Floor for every other joint (exclusive).
    pub joint_min_confidence: f32,
    /// Map `y -> 1 - y`, for detectors reporting normalised coordinates
    /// with a bottom-left origin.
    pub flip_y: bool,
}

impl Default for ConfidenceGateParams {
    fn default() -> Self {
        Self {
            tip_min_confidence: TIP_CONFIDENCE_MIN,
            joint_min_confidence: JOINT_CONFIDENCE_MIN,
            flip_y: false,
        }
    }
}

/// Reasons a frame is rejected by the gate.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GateError {
    #[error("landmark {joint} was not observed")]
    Missing { joint: Joint },
    #[error("no fingertip above confidence {required}")]
    NoConfidentTip { required: f32 },
    #[error("landmark {joint} confidence {confidence:.2} is not above {required:.2}")]
    LowConfidence {
        joint: Joint,
        confidence: f32,
        required: f32,
    },
    #[error(transparent)]
    Landmark(#[from] LandmarkError),
}

#[derive(Clone, Debug, Default)]
pub struct ConfidenceGate {
    params: ConfidenceGateParams,
}

impl ConfidenceGate {
    pub fn new(params: ConfidenceGateParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConfidenceGateParams {
        &self.params
    }

    /// Confidence a joint must exceed to be accepted.
    pub fn required_confidence(&self, joint: Joint) -> f32 {
        if joint == Joint::Wrist || joint.is_tip() {
            self.params.tip_min_confidence
        } else {
            self.params.joint_min_confidence
        }
    }

    /// Accept a complete, confident observation as a [`LandmarkSet`].
    ///
    /// Checks run in order: every joint present, at least one fingertip
    /// above the tip floor, then each joint above its own floor.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn apply(&self, observation: &HandObservation) -> Result<LandmarkSet, GateError> {
        let mut observed = [ObservedLandmark {
            location: Point::origin(),
            confidence: 0.0,
        }; LANDMARK_COUNT];
        for joint in Joint::ALL {
            observed[joint.index()] = *observation
                .get(joint)
                .ok_or(GateError::Missing { joint })?;
        }

        let any_tip = Finger::ALL
            .iter()
            .any(|f| observed[f.tip().index()].confidence > self.params.tip_min_confidence);
        if !any_tip {
            return Err(GateError::NoConfidentTip {
                required: self.params.tip_min_confidence,
            });
        }

        for joint in Joint::ALL {
            let required = self.required_confidence(joint);
            let confidence = observed[joint.index()].confidence;
            // NaN confidence fails this comparison as well
            if !(confidence > required) {
                return Err(GateError::LowConfidence {
                    joint,
                    confidence,
                    required,
                });
            }
        }

        let flip_y = self.params.flip_y;
        let set = LandmarkSet::from_fn(|joint| {
            let p = observed[joint.index()].location;
            if flip_y {
                Point::new(p.x, 1.0 - p.y)
            } else {
                p
            }
        })?;
        Ok(set)
    }
}
