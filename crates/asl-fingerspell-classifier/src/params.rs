use asl_fingerspell_core::thresholds::{DEFAULT_EVIDENCE_TRIGGER, DEFAULT_PINCH_MAX_DISTANCE};
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// When the state sink is invoked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Every state assignment notifies, including re-assigning the current
    /// state on consecutive frames.
    #[default]
    EveryAssignment,
    /// Only assignments that change the state notify.
    OnChange,
}

/// Configuration for [`crate::GestureClassifier`].
///
/// Missing JSON fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierParams {
    /// Distance, in landmark coordinate units, under which two points count
    /// as pinched. Also scales the palm-touch and spread-hand tests.
    pub pinch_max_distance: f32,
    /// Consecutive agreeing frames required before a candidate commits.
    pub evidence_trigger: u32,
    pub notify: NotifyPolicy,
    /// Recognise an open, spread hand as a space. Off by default.
    pub spacebar_gesture: bool,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            pinch_max_distance: DEFAULT_PINCH_MAX_DISTANCE,
            evidence_trigger: DEFAULT_EVIDENCE_TRIGGER,
            notify: NotifyPolicy::default(),
            spacebar_gesture: false,
        }
    }
}

impl ClassifierParams {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.evidence_trigger == 0 {
            return Err(ClassifierError::InvalidParams {
                reason: "evidence_trigger must be at least 1".to_string(),
            });
        }
        if !self.pinch_max_distance.is_finite() || self.pinch_max_distance <= 0.0 {
            return Err(ClassifierError::InvalidParams {
                reason: format!(
                    "pinch_max_distance must be positive and finite, got {}",
                    self.pinch_max_distance
                ),
            });
        }
        Ok(())
    }
}
