//! Per-frame evaluation of every predicate the letter rules consult.

use asl_fingerspell_core::predicates as p;
use asl_fingerspell_core::{Finger, LandmarkSet};

use crate::params::ClassifierParams;

/// Direction flags for one of the four fingers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerPose {
    pub up: bool,
    pub down: bool,
}

impl FingerPose {
    fn of(set: &LandmarkSet, finger: Finger) -> Self {
        Self {
            up: p::is_finger_pointing_up(set, finger),
            down: p::is_finger_pointing_down(set, finger),
        }
    }
}

/// Geometric facts about one hand, evaluated eagerly from a landmark set.
///
/// Field names follow the letter whose rule reads them; several letters
/// share one fact (L and Y both read `thumb_sideways_away`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandFacts {
    pub index: FingerPose,
    pub middle: FingerPose,
    pub ring: FingerPose,
    pub little: FingerPose,

    pub together_index_middle: bool,
    pub together_middle_ring: bool,
    pub together_ring_little: bool,
    pub index_middle_parallel: bool,
    pub index_middle_crossed: bool,

    pub index_sideways: bool,
    pub middle_sideways: bool,
    pub index_c: bool,
    pub index_x: bool,
    pub middle_p: bool,
    pub little_j: bool,
    pub thumb_index_curling: bool,

    pub thumb_a: bool,
    pub thumb_b: bool,
    pub thumb_c: bool,
    pub thumb_middle_d: bool,
    pub thumb_e: bool,
    pub thumb_index_f: bool,
    pub thumb_i: bool,
    pub thumb_k: bool,
    pub thumb_n: bool,
    pub thumb_index_o: bool,
    pub thumb_p: bool,
    pub thumb_q: bool,
    pub thumb_s: bool,
    pub thumb_t: bool,
    pub thumb_uvr: bool,
    pub thumb_x: bool,
    pub thumb_sideways_away: bool,

    pub fingers_spread: bool,
}

impl HandFacts {
    pub fn evaluate(set: &LandmarkSet, params: &ClassifierParams) -> Self {
        Self {
            index: FingerPose::of(set, Finger::Index),
            middle: FingerPose::of(set, Finger::Middle),
            ring: FingerPose::of(set, Finger::Ring),
            little: FingerPose::of(set, Finger::Little),

            together_index_middle: p::are_two_fingers_together(set, Finger::Index, Finger::Middle),
            together_middle_ring: p::are_two_fingers_together(set, Finger::Middle, Finger::Ring),
            together_ring_little: p::are_two_fingers_together(set, Finger::Ring, Finger::Little),
            index_middle_parallel: p::are_index_middle_parallel(set),
            index_middle_crossed: p::are_index_middle_crossed(set),

            index_sideways: p::is_finger_pointing_sideways(set, Finger::Index),
            middle_sideways: p::is_finger_pointing_sideways(set, Finger::Middle),
            index_c: p::is_index_correct_for_c(set),
            index_x: p::is_index_correct_for_x(set),
            middle_p: p::is_middle_correct_for_p(set),
            little_j: p::is_little_correct_for_j(set),
            thumb_index_curling: p::are_thumb_and_index_curling_towards_each_other(set),

            thumb_a: p::is_thumb_correct_for_a(set),
            thumb_b: p::is_thumb_correct_for_b(set),
            thumb_c: p::is_thumb_correct_for_c(set),
            thumb_middle_d: p::is_thumb_middle_spacing_correct_for_d(set),
            thumb_e: p::is_thumb_correct_for_e(set),
            thumb_index_f: p::is_thumb_index_spacing_correct_for_f(set),
            thumb_i: p::is_thumb_correct_for_i(set),
            thumb_k: p::is_thumb_correct_for_k(set),
            thumb_n: p::is_thumb_correct_for_n(set),
            thumb_index_o: p::is_thumb_index_spacing_correct_for_o(set),
            thumb_p: p::is_thumb_correct_for_p(set),
            thumb_q: p::is_thumb_correct_for_q(set),
            thumb_s: p::is_thumb_correct_for_s(set),
            thumb_t: p::is_thumb_correct_for_t(set),
            thumb_uvr: p::is_thumb_correct_for_uvr(set),
            thumb_x: p::is_thumb_correct_for_x(set),
            thumb_sideways_away: p::is_thumb_sideways_away_from_palm(set),

            fingers_spread: p::are_fingers_spread(set, params.pinch_max_distance),
        }
    }

    pub fn four_fingers_up(&self) -> bool {
        self.index.up && self.middle.up && self.ring.up && self.little.up
    }

    pub fn four_fingers_down(&self) -> bool {
        self.index.down && self.middle.down && self.ring.down && self.little.down
    }

    pub fn four_fingers_together(&self) -> bool {
        self.together_index_middle && self.together_middle_ring && self.together_ring_little
    }

    /// Index and middle up, ring and little down.
    pub fn index_middle_only_up(&self) -> bool {
        self.index.up && self.middle.up && self.ring.down && self.little.down
    }

    /// Index, middle and ring down with the little finger up (I, J, Y).
    pub fn little_only_up(&self) -> bool {
        self.index.down && self.middle.down && self.ring.down && self.little.up
    }

    /// Middle, ring and little all pointing down (L, X).
    pub fn last_three_down(&self) -> bool {
        self.middle.down && self.ring.down && self.little.down
    }
}
