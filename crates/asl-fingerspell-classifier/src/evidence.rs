//! Evidence accumulation across consecutive frames.

use serde::{Deserialize, Serialize};

use crate::rules::Candidate;
use crate::state::{EvidenceFamily, GestureState};

/// Frame-agreement tallies, one per evidence family.
///
/// At most one counter is non-zero after any [`EvidenceTracker::observe`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvidenceCounters {
    pub letter: u32,
    pub pinch: u32,
    pub apart: u32,
}

impl EvidenceCounters {
    pub fn get(&self, family: EvidenceFamily) -> u32 {
        match family {
            EvidenceFamily::Letter => self.letter,
            EvidenceFamily::Pinch => self.pinch,
            EvidenceFamily::Apart => self.apart,
        }
    }

    fn get_mut(&mut self, family: EvidenceFamily) -> &mut u32 {
        match family {
            EvidenceFamily::Letter => &mut self.letter,
            EvidenceFamily::Pinch => &mut self.pinch,
            EvidenceFamily::Apart => &mut self.apart,
        }
    }

    /// Increment `family` and zero the other two; returns the new count.
    fn bump(&mut self, family: EvidenceFamily) -> u32 {
        let count = self.get(family).saturating_add(1);
        *self = Self::default();
        *self.get_mut(family) = count;
        count
    }
}

/// Counters plus the candidate they currently count for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvidenceTracker {
    counters: EvidenceCounters,
    last: Option<Candidate>,
}

impl EvidenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> EvidenceCounters {
        self.counters
    }

    /// Candidate selected by the most recent [`observe`](Self::observe).
    pub fn last_candidate(&self) -> Option<Candidate> {
        self.last
    }

    /// Record one more frame selecting `candidate` and return the state to
    /// report: committed once its counter reaches `trigger`, pending before.
    pub fn observe(&mut self, candidate: Candidate, trigger: u32) -> GestureState {
        if self.last != Some(candidate) {
            self.counters = EvidenceCounters::default();
            self.last = Some(candidate);
        }
        let count = self.counters.bump(candidate.family());
        if count >= trigger {
            candidate.committed_state()
        } else {
            candidate.pending_state()
        }
    }

    /// Zero the pinch and apart counters. The letter counter and the last
    /// candidate are kept.
    pub fn reset(&mut self) {
        self.counters.pinch = 0;
        self.counters.apart = 0;
    }
}
