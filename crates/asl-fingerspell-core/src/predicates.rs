//! Geometric predicates over a single [`LandmarkSet`].
//!
//! Every function here is pure. Directions are judged segment by segment
//! (proximal point to distal point) in a frame where Y grows downward, so
//! "up" means a negative vertical delta. Spacing tests are normalised by
//! [`reference_distance`] so they hold across hand sizes and camera
//! distances.

use crate::landmarks::{Finger, Joint, LandmarkSet, Point};
use crate::thresholds::{
    CLOSE_RATIO, CURL_REACH_MAX_RATIO, C_SPACING_MAX_RATIO, PALM_TOUCH_PINCH_MULTIPLIER,
    TOGETHER_SPREAD_RATIO, TOUCHING_MAX_ANGLE_DEG, TOUCHING_RATIO,
};

// --- segment primitives -----------------------------------------------------

/// Segment from `proximal` to `distal` points up and is vertical-dominant.
#[inline]
pub fn segment_points_up(proximal: Point, distal: Point) -> bool {
    let dy = distal.y - proximal.y;
    let dx = distal.x - proximal.x;
    dy < 0.0 && dy.abs() > dx.abs()
}

/// Segment from `proximal` to `distal` points down and is vertical-dominant.
#[inline]
pub fn segment_points_down(proximal: Point, distal: Point) -> bool {
    let dy = distal.y - proximal.y;
    let dx = distal.x - proximal.x;
    dy > 0.0 && dy.abs() > dx.abs()
}

/// Segment is horizontal-dominant, regardless of direction.
#[inline]
pub fn segment_points_sideways(proximal: Point, distal: Point) -> bool {
    let dy = distal.y - proximal.y;
    let dx = distal.x - proximal.x;
    dy.abs() < dx.abs()
}

#[inline]
fn strictly_between(value: f32, a: f32, b: f32) -> bool {
    value > a.min(b) && value < a.max(b)
}

/// Thumb tip to thumb IP length, the unit for all spacing tests.
#[inline]
pub fn reference_distance(set: &LandmarkSet) -> f32 {
    nalgebra::distance(&set.thumb_tip(), &set.thumb_ip())
}

// --- whole-finger direction -------------------------------------------------

/// Finger's middle segment (PIP to DIP; MP to IP for the thumb) points up.
pub fn is_finger_pointing_up(set: &LandmarkSet, finger: Finger) -> bool {
    let [_, pip, dip, _] = set.chain(finger);
    segment_points_up(pip, dip)
}

/// Finger's top segment (DIP to tip; IP to tip for the thumb) points down.
///
/// The horizontal test compares the vertical delta against the *signed*
/// horizontal delta, so a top segment leaning towards negative X always
/// passes it.
pub fn is_finger_pointing_down(set: &LandmarkSet, finger: Finger) -> bool {
    let [_, _, dip, tip] = set.chain(finger);
    let dy = tip.y - dip.y;
    let dx = tip.x - dip.x;
    dy > 0.0 && dy >= dx
}

/// Both the bottom (MCP to PIP) and middle (PIP to DIP) segments are
/// horizontal-dominant.
pub fn is_finger_pointing_sideways(set: &LandmarkSet, finger: Finger) -> bool {
    let [mcp, pip, dip, _] = set.chain(finger);
    segment_points_sideways(mcp, pip) && segment_points_sideways(pip, dip)
}

pub fn are_four_fingers_pointing_up(set: &LandmarkSet) -> bool {
    Finger::FOUR
        .iter()
        .all(|&f| is_finger_pointing_up(set, f))
}

pub fn are_four_fingers_pointing_down(set: &LandmarkSet) -> bool {
    Finger::FOUR
        .iter()
        .all(|&f| is_finger_pointing_down(set, f))
}

// --- finger pairs -----------------------------------------------------------

/// Tips have converged relative to the splay of their bases.
///
/// Compares horizontal gaps only: `|tip_a.x - tip_b.x| <= 1.2 * |mcp_a.x - mcp_b.x|`.
pub fn are_two_fingers_together(set: &LandmarkSet, a: Finger, b: Finger) -> bool {
    if a == b {
        return true;
    }
    let tips_dx = (set.tip(a).x - set.tip(b).x).abs();
    let bases_dx = (set.base(a).x - set.base(b).x).abs();
    tips_dx <= bases_dx * TOGETHER_SPREAD_RATIO
}

pub fn are_four_fingers_together(set: &LandmarkSet) -> bool {
    are_two_fingers_together(set, Finger::Index, Finger::Middle)
        && are_two_fingers_together(set, Finger::Middle, Finger::Ring)
        && are_two_fingers_together(set, Finger::Ring, Finger::Little)
}

/// Index and middle tips keep the left/right order of their MCPs (U family).
pub fn are_index_middle_parallel(set: &LandmarkSet) -> bool {
    let tips = set.index_tip().x - set.middle_tip().x;
    let mcps = set.index_mcp().x - set.middle_mcp().x;
    (tips > 0.0 && mcps > 0.0) || (tips < 0.0 && mcps < 0.0)
}

/// Index and middle tips swap the left/right order of their MCPs (R family).
pub fn are_index_middle_crossed(set: &LandmarkSet) -> bool {
    let tips = set.index_tip().x - set.middle_tip().x;
    let mcps = set.index_mcp().x - set.middle_mcp().x;
    (tips > 0.0 && mcps < 0.0) || (tips < 0.0 && mcps > 0.0)
}

/// Absolute wrist-centred angle between two fingertips, in degrees.
pub fn angle_between_fingertips_deg(set: &LandmarkSet, a: Finger, b: Finger) -> f32 {
    let center = set.wrist();
    let v1 = set.tip(a) - center;
    let v2 = set.tip(b) - center;
    (v2.y.atan2(v2.x) - v1.y.atan2(v1.x)).to_degrees().abs()
}

pub fn are_fingertips_within_touching_angle(set: &LandmarkSet, a: Finger, b: Finger) -> bool {
    angle_between_fingertips_deg(set, a, b) < TOUCHING_MAX_ANGLE_DEG
}

/// Index and middle tips rest on the palm near the thumb base.
pub fn are_four_fingers_touching_palm(set: &LandmarkSet, pinch_max_distance: f32) -> bool {
    let cmc = set.thumb_cmc();
    let limit = pinch_max_distance * PALM_TOUCH_PINCH_MULTIPLIER;
    nalgebra::distance(&cmc, &set.index_tip()) < limit
        && nalgebra::distance(&cmc, &set.middle_tip()) < limit
}

/// Neighbouring fingertips are all further apart than the pinch distance
/// and the thumb IP stands off the index MCP: an open, spread hand.
pub fn are_fingers_spread(set: &LandmarkSet, pinch_max_distance: f32) -> bool {
    set.distance(Joint::IndexTip, Joint::MiddleTip) > pinch_max_distance
        && set.distance(Joint::MiddleTip, Joint::RingTip) > pinch_max_distance
        && set.distance(Joint::RingTip, Joint::LittleTip) > pinch_max_distance
        && set.distance(Joint::ThumbIp, Joint::IndexMcp) > pinch_max_distance
}

/// Index is pointing down and its tip arcs back, neither folded onto the
/// MCP nor fully extended.
pub fn is_index_curled_forward(set: &LandmarkSet) -> bool {
    let pip_mcp = nalgebra::distance(&set.index_pip(), &set.index_mcp());
    let tip_mcp = nalgebra::distance(&set.index_tip(), &set.index_mcp());
    let reach = tip_mcp > pip_mcp && tip_mcp < pip_mcp * CURL_REACH_MAX_RATIO;
    is_finger_pointing_down(set, Finger::Index) && reach
}

pub fn are_thumb_and_index_curling_towards_each_other(set: &LandmarkSet) -> bool {
    is_index_curled_forward(set) && is_thumb_bottom_pointing_sideways(set)
}

// --- thumb ------------------------------------------------------------------

/// IP to tip points up.
pub fn is_thumb_top_pointing_up(set: &LandmarkSet) -> bool {
    segment_points_up(set.thumb_ip(), set.thumb_tip())
}

/// IP to tip is horizontal-dominant.
pub fn is_thumb_top_pointing_sideways(set: &LandmarkSet) -> bool {
    segment_points_sideways(set.thumb_ip(), set.thumb_tip())
}

/// MP to IP points up.
pub fn is_thumb_bottom_pointing_up(set: &LandmarkSet) -> bool {
    segment_points_up(set.thumb_mp(), set.thumb_ip())
}

/// MP to IP is horizontal-dominant while still rising.
pub fn is_thumb_bottom_pointing_sideways(set: &LandmarkSet) -> bool {
    let dy = set.thumb_ip().y - set.thumb_mp().y;
    let dx = set.thumb_ip().x - set.thumb_mp().x;
    dy < 0.0 && dx.abs() > dy.abs()
}

pub fn is_thumb_pointing_up(set: &LandmarkSet) -> bool {
    is_thumb_top_pointing_up(set) && is_thumb_bottom_pointing_up(set)
}

pub fn is_thumb_pointing_sideways(set: &LandmarkSet) -> bool {
    is_thumb_top_pointing_sideways(set) && is_thumb_bottom_pointing_sideways(set)
}

/// Thumb tip lies horizontally within the palm, between thumb MP and
/// little MCP (bounds inclusive, either handedness).
pub fn is_thumb_within_palm_x(set: &LandmarkSet) -> bool {
    let a = set.thumb_mp().x;
    let b = set.little_mcp().x;
    let x = set.thumb_tip().x;
    x >= a.min(b) && x <= a.max(b)
}

/// Thumb sticks out sideways away from the palm (L and Y).
pub fn is_thumb_sideways_away_from_palm(set: &LandmarkSet) -> bool {
    is_thumb_pointing_sideways(set) && !is_thumb_within_palm_x(set)
}

// --- letter specific --------------------------------------------------------

/// Thumb upright beside the fist.
pub fn is_thumb_correct_for_a(set: &LandmarkSet) -> bool {
    !is_thumb_within_palm_x(set) && is_thumb_bottom_pointing_up(set) && is_thumb_top_pointing_up(set)
}

/// Thumb folded across the palm.
pub fn is_thumb_correct_for_b(set: &LandmarkSet) -> bool {
    is_thumb_within_palm_x(set)
}

pub fn is_thumb_correct_for_c(set: &LandmarkSet) -> bool {
    is_thumb_pointing_sideways(set)
}

/// Index middle segment curves sideways.
pub fn is_index_correct_for_c(set: &LandmarkSet) -> bool {
    segment_points_sideways(set.index_pip(), set.index_dip())
}

/// Thumb and index tips leave an open gap between one and two reference
/// distances.
pub fn is_thumb_index_spacing_correct_for_c(set: &LandmarkSet) -> bool {
    let reference = reference_distance(set);
    let d = nalgebra::distance(&set.thumb_tip(), &set.index_tip());
    d > reference * CLOSE_RATIO && d < reference * C_SPACING_MAX_RATIO
}

/// Thumb tip touches the middle tip.
pub fn is_thumb_middle_spacing_correct_for_d(set: &LandmarkSet) -> bool {
    let reference = reference_distance(set);
    nalgebra::distance(&set.thumb_tip(), &set.middle_tip()) < reference * TOUCHING_RATIO
}

/// Thumb tip tucked below the middle and ring DIPs, inside the palm.
pub fn is_thumb_correct_for_e(set: &LandmarkSet) -> bool {
    let tip = set.thumb_tip();
    let below = tip.y > set.middle_dip().y && tip.y > set.ring_dip().y;
    below && is_thumb_within_palm_x(set)
}

/// Thumb tip touches the index tip.
pub fn is_thumb_index_spacing_correct_for_f(set: &LandmarkSet) -> bool {
    let reference = reference_distance(set);
    nalgebra::distance(&set.thumb_tip(), &set.index_tip()) < reference * TOUCHING_RATIO
}

pub fn is_thumb_correct_for_i(set: &LandmarkSet) -> bool {
    is_thumb_within_palm_x(set)
}

/// Thumb upright with its tip between the index and middle tips.
pub fn is_thumb_correct_for_k(set: &LandmarkSet) -> bool {
    let x = set.thumb_tip().x;
    is_thumb_pointing_up(set) && strictly_between(x, set.middle_tip().x, set.index_tip().x)
}

/// Thumb tip between the middle and little PIPs, above the ring tip.
pub fn is_thumb_correct_for_n(set: &LandmarkSet) -> bool {
    let tip = set.thumb_tip();
    strictly_between(tip.x, set.middle_pip().x, set.little_pip().x) && tip.y < set.ring_tip().y
}

/// Thumb tip close to the index tip.
pub fn is_thumb_index_spacing_correct_for_o(set: &LandmarkSet) -> bool {
    let reference = reference_distance(set);
    nalgebra::distance(&set.thumb_tip(), &set.index_tip()) < reference * CLOSE_RATIO
}

/// Both upper thumb segments head downward (direction only).
pub fn is_thumb_correct_for_p(set: &LandmarkSet) -> bool {
    let top_dy = set.thumb_tip().y - set.thumb_ip().y;
    let middle_dy = set.thumb_ip().y - set.thumb_mp().y;
    top_dy > 0.0 && middle_dy > 0.0
}

/// Middle finger hangs straight down from the MCP.
pub fn is_middle_correct_for_p(set: &LandmarkSet) -> bool {
    segment_points_down(set.middle_mcp(), set.middle_pip())
        && segment_points_down(set.middle_pip(), set.middle_dip())
}

pub fn is_thumb_correct_for_q(set: &LandmarkSet) -> bool {
    is_finger_pointing_down(set, Finger::Thumb)
}

pub fn is_thumb_correct_for_s(set: &LandmarkSet) -> bool {
    is_thumb_within_palm_x(set)
}

/// Thumb tip between the index and middle PIPs, above the ring tip.
pub fn is_thumb_correct_for_t(set: &LandmarkSet) -> bool {
    let tip = set.thumb_tip();
    strictly_between(tip.x, set.index_pip().x, set.middle_pip().x) && tip.y < set.ring_tip().y
}

/// Thumb tip nearer the ring PIP than its own MP (shared by U, V and R).
pub fn is_thumb_correct_for_uvr(set: &LandmarkSet) -> bool {
    let tip = set.thumb_tip();
    nalgebra::distance(&tip, &set.ring_pip()) < nalgebra::distance(&tip, &set.thumb_mp())
}

/// Thumb tip holds down the little finger at its PIP.
pub fn is_thumb_correct_for_w(set: &LandmarkSet) -> bool {
    let reference = reference_distance(set);
    nalgebra::distance(&set.thumb_tip(), &set.little_pip()) < reference * CLOSE_RATIO
}

pub fn is_thumb_correct_for_x(set: &LandmarkSet) -> bool {
    is_thumb_within_palm_x(set)
}

/// Index rises from the MCP then hooks over sideways at the PIP.
pub fn is_index_correct_for_x(set: &LandmarkSet) -> bool {
    let bottom_up = segment_points_up(set.index_mcp(), set.index_pip());
    let dy = set.index_dip().y - set.index_pip().y;
    let dx = set.index_dip().x - set.index_pip().x;
    bottom_up && dy < 0.0 && dy.abs() < dx.abs()
}

/// Little finger base segment rises while pointing to the side.
pub fn is_little_correct_for_j(set: &LandmarkSet) -> bool {
    let dy = set.little_pip().y - set.little_mcp().y;
    let dx = set.little_pip().x - set.little_mcp().x;
    dy < 0.0 && dy.abs() < dx.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Open palm facing the camera, fingers straight up, thumb folded in.
    fn open_palm() -> LandmarkSet {
        let mut pts = [p(0.0, 0.0); 21];
        pts[0] = p(100.0, 300.0);
        pts[1] = p(70.0, 270.0);
        pts[2] = p(60.0, 240.0);
        pts[3] = p(80.0, 215.0);
        pts[4] = p(100.0, 200.0);
        for (k, x) in [60.0f32, 90.0, 120.0, 150.0].iter().enumerate() {
            let base = 5 + 4 * k;
            pts[base] = p(*x, 200.0);
            pts[base + 1] = p(*x, 160.0);
            pts[base + 2] = p(*x, 130.0);
            pts[base + 3] = p(*x, 105.0);
        }
        LandmarkSet::new(pts).expect("finite")
    }

    #[test]
    fn segment_directions_use_downward_y() {
        assert!(segment_points_up(p(0.0, 10.0), p(1.0, 0.0)));
        assert!(!segment_points_up(p(0.0, 0.0), p(1.0, 10.0)));
        assert!(segment_points_down(p(0.0, 0.0), p(1.0, 10.0)));
        assert!(segment_points_sideways(p(0.0, 0.0), p(-10.0, 1.0)));
        // exact diagonal is neither vertical- nor horizontal-dominant
        assert!(!segment_points_up(p(0.0, 5.0), p(5.0, 0.0)));
        assert!(!segment_points_sideways(p(0.0, 5.0), p(5.0, 0.0)));
    }

    #[test]
    fn open_palm_has_four_fingers_up_and_together() {
        let set = open_palm();
        assert!(are_four_fingers_pointing_up(&set));
        assert!(!are_four_fingers_pointing_down(&set));
        assert!(are_four_fingers_together(&set));
        assert!(is_thumb_within_palm_x(&set));
        assert!(are_index_middle_parallel(&set));
        assert!(!are_index_middle_crossed(&set));
    }

    #[test]
    fn pointing_down_uses_signed_horizontal_delta() {
        let mut pts = *open_palm().points();
        // index DIP -> tip: dy = 5, dx = -40 (leaning left, mostly horizontal)
        pts[7] = p(60.0, 130.0);
        pts[8] = p(20.0, 135.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert!(is_finger_pointing_down(&set, Finger::Index));
        // mirrored: dx = +40 fails
        pts[8] = p(100.0, 135.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert!(!is_finger_pointing_down(&set, Finger::Index));
    }

    #[test]
    fn fingers_together_compares_tip_and_base_spread() {
        let mut pts = *open_palm().points();
        assert!(are_two_fingers_together(&open_palm(), Finger::Index, Finger::Middle));
        // spread index tip out: tip gap 40 > 1.2 * 30
        pts[8] = p(50.0, 105.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert!(!are_two_fingers_together(&set, Finger::Index, Finger::Middle));
        // tip gap 35 is within 1.2 * 30
        pts[8] = p(55.0, 105.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert!(are_two_fingers_together(&set, Finger::Index, Finger::Middle));
        assert!(are_two_fingers_together(&set, Finger::Ring, Finger::Ring));
    }

    #[test]
    fn spread_hand_is_judged_against_pinch_distance() {
        let set = open_palm();
        // neighbouring tips are 30 apart, thumb IP to index MCP is 25
        assert!(are_fingers_spread(&set, 20.0));
        assert!(!are_fingers_spread(&set, 27.0));
        assert!(!are_fingers_spread(&set, 50.0));
    }

    #[test]
    fn crossed_and_parallel_are_exclusive() {
        let mut pts = *open_palm().points();
        // index tip moves right of middle tip while its MCP stays left
        pts[8] = p(100.0, 105.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert!(are_index_middle_crossed(&set));
        assert!(!are_index_middle_parallel(&set));
        pts[8] = p(70.0, 105.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert!(are_index_middle_parallel(&set));
        assert!(!are_index_middle_crossed(&set));
    }

    #[test]
    fn palm_containment_is_inclusive_for_either_hand() {
        let set = open_palm();
        // thumb MP at x = 60, little MCP at x = 150, thumb tip at x = 100
        assert!(is_thumb_within_palm_x(&set));
        let mirrored = LandmarkSet::from_fn(|j| {
            let q = set.point(j);
            p(400.0 - q.x, q.y)
        })
        .expect("finite");
        assert!(is_thumb_within_palm_x(&mirrored));

        let mut pts = *set.points();
        pts[4] = p(60.0, 200.0);
        let on_bound = LandmarkSet::new(pts).expect("finite");
        assert!(is_thumb_within_palm_x(&on_bound));
        pts[4] = p(59.0, 200.0);
        let outside = LandmarkSet::new(pts).expect("finite");
        assert!(!is_thumb_within_palm_x(&outside));
    }

    #[test]
    fn spacing_predicates_scale_with_reference_distance() {
        let mut pts = *open_palm().points();
        pts[3] = p(100.0, 220.0);
        pts[4] = p(100.0, 200.0);
        // reference distance = 20
        pts[12] = p(105.0, 200.0);
        pts[8] = p(130.0, 200.0);
        let set = LandmarkSet::new(pts).expect("finite");
        assert_relative_eq!(reference_distance(&set), 20.0);
        assert!(is_thumb_middle_spacing_correct_for_d(&set));
        assert!(!is_thumb_index_spacing_correct_for_f(&set));
        assert!(is_thumb_index_spacing_correct_for_c(&set));
        assert!(!is_thumb_index_spacing_correct_for_o(&set));

        let doubled = LandmarkSet::from_fn(|j| {
            let q = set.point(j);
            p(q.x * 2.0, q.y * 2.0)
        })
        .expect("finite");
        assert!(is_thumb_middle_spacing_correct_for_d(&doubled));
        assert!(is_thumb_index_spacing_correct_for_c(&doubled));
    }

    #[test]
    fn fingertip_angle_is_wrist_centred() {
        let set = open_palm();
        let angle = angle_between_fingertips_deg(&set, Finger::Index, Finger::Little);
        let expected = ((-195.0f32).atan2(50.0) - (-195.0f32).atan2(-40.0)).to_degrees().abs();
        assert_relative_eq!(angle, expected, epsilon = 1e-4);
        assert!(are_fingertips_within_touching_angle(&set, Finger::Index, Finger::Middle));
        assert!(!are_fingertips_within_touching_angle(&set, Finger::Index, Finger::Little));
    }

    #[test]
    fn palm_touch_uses_pinch_multiple() {
        let set = open_palm();
        // thumb CMC (70, 270) to index tip (60, 105): ~165.3
        assert!(!are_four_fingers_touching_palm(&set, 50.0));
        assert!(are_four_fingers_touching_palm(&set, 100.0));
    }
}
