//! Ordered letter rules.
//!
//! Rules are tried top to bottom and the first guard that holds wins, even
//! when a later guard would also hold. Each rule then resolves to a
//! candidate, or to nothing when its family matched but no member did.

use serde::{Deserialize, Serialize};

use crate::facts::HandFacts;
use crate::state::{EvidenceFamily, GestureState, Letter};

/// What a single frame looks like, before evidence is accumulated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Candidate {
    Letter(Letter),
    Spacebar,
    /// No letter rule matched.
    Apart,
}

impl Candidate {
    pub fn family(self) -> EvidenceFamily {
        match self {
            Candidate::Letter(l) => l.evidence_family(),
            Candidate::Spacebar => EvidenceFamily::Pinch,
            Candidate::Apart => EvidenceFamily::Apart,
        }
    }

    /// State reported once enough frames agree on this candidate.
    pub fn committed_state(self) -> GestureState {
        match self {
            Candidate::Letter(l) => GestureState::Letter(l),
            Candidate::Spacebar => GestureState::Spacebar,
            Candidate::Apart => GestureState::Apart,
        }
    }

    /// State reported while evidence for this candidate accumulates.
    pub fn pending_state(self) -> GestureState {
        match self.family() {
            EvidenceFamily::Apart => GestureState::PossibleApart,
            EvidenceFamily::Letter | EvidenceFamily::Pinch => GestureState::PossibleLetter,
        }
    }
}

impl From<Letter> for Candidate {
    fn from(letter: Letter) -> Self {
        Candidate::Letter(letter)
    }
}

/// One entry of the priority list.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub guard: fn(&HandFacts) -> bool,
    pub resolve: fn(&HandFacts) -> Option<Candidate>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Outcome of walking the rules for one frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    Matched {
        rule: &'static str,
        candidate: Candidate,
    },
    /// A rule's guard held but none of its letters did. The frame leaves
    /// counters and state untouched.
    Hold { rule: &'static str },
    /// No guard held.
    Apart,
}

impl Decision {
    pub fn candidate(self) -> Option<Candidate> {
        match self {
            Decision::Matched { candidate, .. } => Some(candidate),
            Decision::Hold { .. } => None,
            Decision::Apart => Some(Candidate::Apart),
        }
    }

    pub fn rule(self) -> Option<&'static str> {
        match self {
            Decision::Matched { rule, .. } | Decision::Hold { rule } => Some(rule),
            Decision::Apart => None,
        }
    }
}

fn letter(l: Letter) -> Option<Candidate> {
    Some(Candidate::Letter(l))
}

fn resolve_fist(f: &HandFacts) -> Option<Candidate> {
    let l = if f.thumb_a {
        Letter::A
    } else if f.thumb_index_o && f.thumb_index_curling {
        Letter::O
    } else if f.thumb_t {
        Letter::T
    } else if f.thumb_n {
        Letter::N
    } else if f.thumb_e {
        Letter::E
    } else if f.thumb_s {
        Letter::S
    } else {
        Letter::M
    };
    letter(l)
}

fn resolve_two_up(f: &HandFacts) -> Option<Candidate> {
    if f.thumb_k && !f.together_index_middle {
        letter(Letter::K)
    } else if f.thumb_uvr {
        if !f.together_index_middle {
            letter(Letter::V)
        } else if f.index_middle_parallel {
            letter(Letter::U)
        } else if f.index_middle_crossed {
            letter(Letter::R)
        } else {
            None
        }
    } else {
        None
    }
}

fn resolve_index_sideways(f: &HandFacts) -> Option<Candidate> {
    if f.middle_sideways {
        letter(Letter::H)
    } else if f.middle_p && f.thumb_p {
        letter(Letter::P)
    } else {
        letter(Letter::G)
    }
}

/// The letter rules in priority order.
pub static LETTER_RULES: [Rule; 14] = [
    Rule {
        name: "four_fingers_down",
        guard: |f| f.four_fingers_down(),
        resolve: resolve_fist,
    },
    Rule {
        name: "index_middle_up",
        guard: |f| f.index_middle_only_up(),
        resolve: resolve_two_up,
    },
    Rule {
        name: "index_sideways",
        guard: |f| f.index_sideways,
        resolve: resolve_index_sideways,
    },
    Rule {
        name: "B",
        guard: |f| f.four_fingers_up() && f.four_fingers_together() && f.thumb_b,
        resolve: |_| letter(Letter::B),
    },
    Rule {
        name: "C",
        guard: |f| f.thumb_c && f.index_c,
        resolve: |_| letter(Letter::C),
    },
    Rule {
        name: "D",
        guard: |f| {
            f.index.up
                && !f.middle.up
                && !f.ring.up
                && !f.little.up
                && f.thumb_middle_d
                && f.together_middle_ring
                && f.together_ring_little
        },
        resolve: |_| letter(Letter::D),
    },
    Rule {
        name: "F",
        guard: |f| f.thumb_index_f && f.middle.up && f.ring.up && f.little.up,
        resolve: |_| letter(Letter::F),
    },
    Rule {
        name: "I",
        guard: |f| f.thumb_i && f.little_only_up(),
        resolve: |_| letter(Letter::I),
    },
    Rule {
        name: "J",
        guard: |f| f.thumb_a && f.little_only_up() && f.little_j,
        resolve: |_| letter(Letter::J),
    },
    Rule {
        name: "L",
        guard: |f| f.thumb_sideways_away && f.index.up && f.last_three_down(),
        resolve: |_| letter(Letter::L),
    },
    Rule {
        name: "Q",
        guard: |f| f.thumb_q && f.index.down,
        resolve: |_| letter(Letter::Q),
    },
    Rule {
        name: "W",
        guard: |f| f.index.up && f.middle.up && f.ring.up && !f.little.up,
        resolve: |_| letter(Letter::W),
    },
    Rule {
        name: "X",
        guard: |f| f.thumb_x && f.index_x && f.last_three_down(),
        resolve: |_| letter(Letter::X),
    },
    Rule {
        name: "Y",
        guard: |f| f.thumb_sideways_away && f.little_only_up(),
        resolve: |_| letter(Letter::Y),
    },
];

/// Open, spread hand read as a space. Tried after every letter rule.
pub static SPACEBAR_RULE: Rule = Rule {
    name: "spacebar",
    guard: |f| f.fingers_spread,
    resolve: |_| Some(Candidate::Spacebar),
};

/// Walk `rules` in order; the first guard that holds decides the frame.
pub fn decide(facts: &HandFacts, rules: &[Rule]) -> Decision {
    for rule in rules {
        if (rule.guard)(facts) {
            return match (rule.resolve)(facts) {
                Some(candidate) => Decision::Matched {
                    rule: rule.name,
                    candidate,
                },
                None => Decision::Hold { rule: rule.name },
            };
        }
    }
    Decision::Apart
}
