//! The gesture classifier: rules plus evidence, one frame at a time.

use asl_fingerspell_core::LandmarkSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::ClassifierError;
use crate::evidence::{EvidenceCounters, EvidenceTracker};
use crate::facts::HandFacts;
use crate::params::{ClassifierParams, NotifyPolicy};
use crate::rules::{decide, Decision, Rule, LETTER_RULES, SPACEBAR_RULE};
use crate::state::GestureState;

/// Receives every notified state, synchronously, on the caller's thread.
pub type StateSink = Box<dyn FnMut(GestureState) + Send>;

/// Result of one classifier operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    pub previous: GestureState,
    pub current: GestureState,
    /// Whether the assignment is reported to the sink.
    pub notify: bool,
}

impl StateTransition {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Classifies a stream of landmark sets for one hand.
///
/// Calls must come from a single producer in frame order. Each
/// [`process_points_set`](Self::process_points_set) decides a candidate for
/// the frame, accumulates evidence for it and assigns the resulting state;
/// the sink, if any, is invoked after the decision is complete.
pub struct GestureClassifier {
    params: ClassifierParams,
    rules: Vec<Rule>,
    state: GestureState,
    evidence: EvidenceTracker,
    last_points: Option<LandmarkSet>,
    sink: Option<StateSink>,
}

impl std::fmt::Debug for GestureClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureClassifier")
            .field("params", &self.params)
            .field("state", &self.state)
            .field("evidence", &self.evidence)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl GestureClassifier {
    pub fn new(params: ClassifierParams) -> Result<Self, ClassifierError> {
        params.validate()?;
        let mut rules = LETTER_RULES.to_vec();
        if params.spacebar_gesture {
            rules.push(SPACEBAR_RULE);
        }
        Ok(Self {
            params,
            rules,
            state: GestureState::Unknown,
            evidence: EvidenceTracker::new(),
            last_points: None,
            sink: None,
        })
    }

    pub fn with_sink(mut self, sink: impl FnMut(GestureState) + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn set_sink(&mut self, sink: Option<StateSink>) {
        self.sink = sink;
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn counters(&self) -> EvidenceCounters {
        self.evidence.counters()
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The landmark set of the most recent frame, for overlay rendering.
    pub fn last_processed_points_set(&self) -> Option<&LandmarkSet> {
        self.last_points.as_ref()
    }

    /// Classify one frame without notifying the sink.
    ///
    /// Updates the stored points, the counters and the state exactly as
    /// [`process_points_set`](Self::process_points_set) does. Returns the
    /// decision and the newly assigned state, or `None` for a hold.
    pub fn step(&mut self, points: &LandmarkSet) -> (Decision, Option<GestureState>) {
        self.last_points = Some(*points);
        let facts = HandFacts::evaluate(points, &self.params);
        let decision = decide(&facts, &self.rules);
        trace!("decision {:?} from {:?}", decision, facts);

        let assigned = decision.candidate().map(|candidate| {
            let state = self
                .evidence
                .observe(candidate, self.params.evidence_trigger);
            self.state = state;
            state
        });
        (decision, assigned)
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn process_points_set(&mut self, points: &LandmarkSet) -> StateTransition {
        let previous = self.state;
        let (decision, assigned) = self.step(points);
        let transition = match assigned {
            Some(current) => self.transition(previous, current),
            None => {
                trace!("hold in rule {:?}", decision.rule());
                StateTransition {
                    previous,
                    current: previous,
                    notify: false,
                }
            }
        };
        self.emit(&transition);
        transition
    }

    /// Force the state back to `Unknown` and zero the pinch and apart
    /// counters.
    pub fn reset(&mut self) -> StateTransition {
        let previous = self.state;
        self.evidence.reset();
        self.state = GestureState::Unknown;
        let transition = self.transition(previous, GestureState::Unknown);
        self.emit(&transition);
        transition
    }

    fn transition(&self, previous: GestureState, current: GestureState) -> StateTransition {
        let notify = match self.params.notify {
            NotifyPolicy::EveryAssignment => true,
            NotifyPolicy::OnChange => previous != current,
        };
        StateTransition {
            previous,
            current,
            notify,
        }
    }

    fn emit(&mut self, transition: &StateTransition) {
        if transition.changed() {
            debug!("state {} -> {}", transition.previous, transition.current);
        }
        if !transition.notify {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            sink(transition.current);
        }
    }
}
