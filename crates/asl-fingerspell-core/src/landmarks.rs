//! Hand skeleton data model: fingers, the 21 named joints and the
//! per-frame [`LandmarkSet`].
//!
//! All points live in one 2D image-like frame where Y grows downward.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A 2D landmark position (Y grows downward).
pub type Point = Point2<f32>;

/// Number of tracked landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

/// One of the five digits of the hand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    /// The four non-thumb fingers.
    pub const FOUR: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Little];

    /// Joints of this finger ordered base-to-tip.
    ///
    /// The thumb maps CMC/MP/IP/tip onto the MCP/PIP/DIP/tip roles.
    pub const fn chain(self) -> [Joint; 4] {
        match self {
            Finger::Thumb => [Joint::ThumbCmc, Joint::ThumbMp, Joint::ThumbIp, Joint::ThumbTip],
            Finger::Index => [Joint::IndexMcp, Joint::IndexPip, Joint::IndexDip, Joint::IndexTip],
            Finger::Middle => [
                Joint::MiddleMcp,
                Joint::MiddlePip,
                Joint::MiddleDip,
                Joint::MiddleTip,
            ],
            Finger::Ring => [Joint::RingMcp, Joint::RingPip, Joint::RingDip, Joint::RingTip],
            Finger::Little => [
                Joint::LittleMcp,
                Joint::LittlePip,
                Joint::LittleDip,
                Joint::LittleTip,
            ],
        }
    }

    #[inline]
    pub const fn base(self) -> Joint {
        self.chain()[0]
    }

    #[inline]
    pub const fn tip(self) -> Joint {
        self.chain()[3]
    }
}

/// The 21 named hand landmarks, in the usual hand-landmarker index order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    LittleMcp = 17,
    LittlePip = 18,
    LittleDip = 19,
    LittleTip = 20,
}

impl Joint {
    pub const ALL: [Joint; LANDMARK_COUNT] = [
        Joint::Wrist,
        Joint::ThumbCmc,
        Joint::ThumbMp,
        Joint::ThumbIp,
        Joint::ThumbTip,
        Joint::IndexMcp,
        Joint::IndexPip,
        Joint::IndexDip,
        Joint::IndexTip,
        Joint::MiddleMcp,
        Joint::MiddlePip,
        Joint::MiddleDip,
        Joint::MiddleTip,
        Joint::RingMcp,
        Joint::RingPip,
        Joint::RingDip,
        Joint::RingTip,
        Joint::LittleMcp,
        Joint::LittlePip,
        Joint::LittleDip,
        Joint::LittleTip,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Finger this joint belongs to, `None` for the wrist.
    pub const fn finger(self) -> Option<Finger> {
        match self.index() {
            0 => None,
            1..=4 => Some(Finger::Thumb),
            5..=8 => Some(Finger::Index),
            9..=12 => Some(Finger::Middle),
            13..=16 => Some(Finger::Ring),
            _ => Some(Finger::Little),
        }
    }

    /// `true` for the five fingertips.
    #[inline]
    pub const fn is_tip(self) -> bool {
        matches!(
            self,
            Joint::ThumbTip | Joint::IndexTip | Joint::MiddleTip | Joint::RingTip | Joint::LittleTip
        )
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Errors raised while building a [`LandmarkSet`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("landmark {joint} has a non-finite coordinate")]
    NonFinite { joint: Joint },
    #[error("landmark {joint} is missing")]
    Missing { joint: Joint },
}

/// Complete set of 21 landmarks for one hand in one frame.
///
/// Every coordinate is finite; there is no way to build a partial set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Joint, [f32; 2]>",
    into = "BTreeMap<Joint, [f32; 2]>"
)]
pub struct LandmarkSet {
    points: [Point; LANDMARK_COUNT],
}

impl LandmarkSet {
    /// Build a set from points indexed by [`Joint::index`].
    pub fn new(points: [Point; LANDMARK_COUNT]) -> Result<Self, LandmarkError> {
        for joint in Joint::ALL {
            let p = points[joint.index()];
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(LandmarkError::NonFinite { joint });
            }
        }
        Ok(Self { points })
    }

    /// Build a set by asking for each joint's position.
    pub fn from_fn(mut f: impl FnMut(Joint) -> Point) -> Result<Self, LandmarkError> {
        let mut points = [Point::origin(); LANDMARK_COUNT];
        for joint in Joint::ALL {
            points[joint.index()] = f(joint);
        }
        Self::new(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.points
    }

    #[inline]
    pub fn point(&self, joint: Joint) -> Point {
        self.points[joint.index()]
    }

    /// Finger joints ordered base-to-tip.
    pub fn chain(&self, finger: Finger) -> [Point; 4] {
        finger.chain().map(|j| self.point(j))
    }

    #[inline]
    pub fn tip(&self, finger: Finger) -> Point {
        self.point(finger.tip())
    }

    #[inline]
    pub fn base(&self, finger: Finger) -> Point {
        self.point(finger.base())
    }

    /// Euclidean distance between two landmarks.
    #[inline]
    pub fn distance(&self, a: Joint, b: Joint) -> f32 {
        nalgebra::distance(&self.point(a), &self.point(b))
    }

    /// Fingertips (thumb to little) followed by the wrist, the markers an
    /// overlay usually draws.
    pub fn overlay_points(&self) -> [Point; 6] {
        [
            self.thumb_tip(),
            self.index_tip(),
            self.middle_tip(),
            self.ring_tip(),
            self.little_tip(),
            self.wrist(),
        ]
    }

    /// Copy of this set with every point translated by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            points: self.points.map(|p| Point::new(p.x + dx, p.y + dy)),
        }
    }

    #[inline]
    pub fn wrist(&self) -> Point {
        self.point(Joint::Wrist)
    }
    #[inline]
    pub fn thumb_cmc(&self) -> Point {
        self.point(Joint::ThumbCmc)
    }
    #[inline]
    pub fn thumb_mp(&self) -> Point {
        self.point(Joint::ThumbMp)
    }
    #[inline]
    pub fn thumb_ip(&self) -> Point {
        self.point(Joint::ThumbIp)
    }
    #[inline]
    pub fn thumb_tip(&self) -> Point {
        self.point(Joint::ThumbTip)
    }
    #[inline]
    pub fn index_mcp(&self) -> Point {
        self.point(Joint::IndexMcp)
    }
    #[inline]
    pub fn index_pip(&self) -> Point {
        self.point(Joint::IndexPip)
    }
    #[inline]
    pub fn index_dip(&self) -> Point {
        self.point(Joint::IndexDip)
    }
    #[inline]
    pub fn index_tip(&self) -> Point {
        self.point(Joint::IndexTip)
    }
    #[inline]
    pub fn middle_mcp(&self) -> Point {
        self.point(Joint::MiddleMcp)
    }
    #[inline]
    pub fn middle_pip(&self) -> Point {
        self.point(Joint::MiddlePip)
    }
    #[inline]
    pub fn middle_dip(&self) -> Point {
        self.point(Joint::MiddleDip)
    }
    #[inline]
    pub fn middle_tip(&self) -> Point {
        self.point(Joint::MiddleTip)
    }
    #[inline]
    pub fn ring_mcp(&self) -> Point {
        self.point(Joint::RingMcp)
    }
    #[inline]
    pub fn ring_pip(&self) -> Point {
        self.point(Joint::RingPip)
    }
    #[inline]
    pub fn ring_dip(&self) -> Point {
        self.point(Joint::RingDip)
    }
    #[inline]
    pub fn ring_tip(&self) -> Point {
        self.point(Joint::RingTip)
    }
    #[inline]
    pub fn little_mcp(&self) -> Point {
        self.point(Joint::LittleMcp)
    }
    #[inline]
    pub fn little_pip(&self) -> Point {
        self.point(Joint::LittlePip)
    }
    #[inline]
    pub fn little_dip(&self) -> Point {
        self.point(Joint::LittleDip)
    }
    #[inline]
    pub fn little_tip(&self) -> Point {
        self.point(Joint::LittleTip)
    }
}

impl Index<Joint> for LandmarkSet {
    type Output = Point;

    fn index(&self, joint: Joint) -> &Point {
        &self.points[joint.index()]
    }
}

impl TryFrom<BTreeMap<Joint, [f32; 2]>> for LandmarkSet {
    type Error = LandmarkError;

    fn try_from(map: BTreeMap<Joint, [f32; 2]>) -> Result<Self, Self::Error> {
        let mut points = [Point::origin(); LANDMARK_COUNT];
        for joint in Joint::ALL {
            let [x, y] = map
                .get(&joint)
                .copied()
                .ok_or(LandmarkError::Missing { joint })?;
            points[joint.index()] = Point::new(x, y);
        }
        Self::new(points)
    }
}

impl From<LandmarkSet> for BTreeMap<Joint, [f32; 2]> {
    fn from(set: LandmarkSet) -> Self {
        Joint::ALL
            .iter()
            .map(|&j| {
                let p = set.point(j);
                (j, [p.x, p.y])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_set() -> LandmarkSet {
        LandmarkSet::from_fn(|j| Point::new(j.index() as f32, 2.0 * j.index() as f32))
            .expect("finite set")
    }

    #[test]
    fn finger_chains_are_base_to_tip() {
        for finger in Finger::ALL {
            let chain = finger.chain();
            assert!(chain.windows(2).all(|w| w[0].index() + 1 == w[1].index()));
            assert!(chain[3].is_tip());
            assert_eq!(chain[0].finger(), Some(finger));
        }
        assert_eq!(Joint::Wrist.finger(), None);
    }

    #[test]
    fn rejects_non_finite_points() {
        let err = LandmarkSet::from_fn(|j| {
            if j == Joint::RingDip {
                Point::new(f32::NAN, 0.0)
            } else {
                Point::origin()
            }
        })
        .unwrap_err();
        assert_eq!(err, LandmarkError::NonFinite { joint: Joint::RingDip });
    }

    #[test]
    fn json_round_trip_by_joint_name() {
        let set = grid_set();
        let json = serde_json::to_string(&set).expect("serialize");
        assert!(json.contains("\"little_tip\":[20.0,40.0]"));
        let back: LandmarkSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, set);
    }

    #[test]
    fn json_with_missing_joint_is_rejected() {
        let mut map: BTreeMap<Joint, [f32; 2]> = grid_set().into();
        map.remove(&Joint::ThumbIp);
        let json = serde_json::to_string(&map).expect("serialize");
        assert!(serde_json::from_str::<LandmarkSet>(&json).is_err());
    }

    #[test]
    fn accessors_follow_joint_order() {
        let set = grid_set();
        assert_eq!(set.middle_pip(), Point::new(10.0, 20.0));
        assert_eq!(set[Joint::RingTip], set.ring_tip());
        assert_eq!(set.chain(Finger::Thumb)[2], set.thumb_ip());
        assert_eq!(set.overlay_points()[5], set.wrist());
    }
}
