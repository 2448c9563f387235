//! Synthetic hands for classifier tests.
//!
//! Hands are upright in a Y-down frame: wrist at (100, 300), MCPs on
//! y = 200 at x = 60 (index), 90, 120 and 150 (little).

#![allow(dead_code)]

use asl_fingerspell_classifier::Letter;
use asl_fingerspell_core::{Finger, LandmarkSet, Point};

pub type Chain = [(f32, f32); 4];

pub const THUMB_FOLDED: Chain = [(70.0, 270.0), (75.0, 245.0), (95.0, 230.0), (105.0, 212.0)];
pub const THUMB_A: Chain = [(70.0, 270.0), (50.0, 240.0), (45.0, 210.0), (45.0, 185.0)];
pub const THUMB_AWAY: Chain = [(70.0, 270.0), (50.0, 250.0), (20.0, 240.0), (-10.0, 238.0)];

const INDEX_SIDEWAYS: Chain = [(60.0, 200.0), (30.0, 195.0), (10.0, 193.0), (-5.0, 192.0)];
const INDEX_SPLAYED: Chain = [(60.0, 200.0), (55.0, 160.0), (48.0, 130.0), (40.0, 105.0)];
const MIDDLE_SPLAYED: Chain = [(90.0, 200.0), (97.0, 160.0), (104.0, 130.0), (110.0, 105.0)];
const THUMB_OVER_RING: Chain = [(70.0, 270.0), (80.0, 245.0), (100.0, 220.0), (115.0, 195.0)];

fn column(finger: Finger) -> f32 {
    match finger {
        Finger::Thumb => 70.0,
        Finger::Index => 60.0,
        Finger::Middle => 90.0,
        Finger::Ring => 120.0,
        Finger::Little => 150.0,
    }
}

#[derive(Clone, Debug)]
pub struct HandBuilder {
    points: [Point; 21],
}

impl Default for HandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HandBuilder {
    /// Flat open hand: four fingers straight up, thumb folded over the palm.
    pub fn new() -> Self {
        let mut builder = Self {
            points: [Point::new(100.0, 300.0); 21],
        };
        builder = builder.thumb(THUMB_FOLDED);
        for finger in Finger::FOUR {
            builder = builder.up(finger);
        }
        builder
    }

    pub fn finger(mut self, finger: Finger, chain: Chain) -> Self {
        for (joint, (x, y)) in finger.chain().into_iter().zip(chain) {
            self.points[joint.index()] = Point::new(x, y);
        }
        self
    }

    pub fn thumb(self, chain: Chain) -> Self {
        self.finger(Finger::Thumb, chain)
    }

    pub fn up(self, finger: Finger) -> Self {
        let x = column(finger);
        self.finger(finger, [(x, 200.0), (x, 160.0), (x, 130.0), (x, 105.0)])
    }

    /// Folded into the palm: middle segment drops, tip hangs below the MCP.
    pub fn curled(self, finger: Finger) -> Self {
        let x = column(finger);
        self.finger(finger, [(x, 200.0), (x, 170.0), (x, 185.0), (x, 205.0)])
    }

    pub fn fist(self) -> Self {
        Finger::FOUR.into_iter().fold(self, |b, f| b.curled(f))
    }

    pub fn build(self) -> LandmarkSet {
        LandmarkSet::new(self.points).expect("fixture points are finite")
    }
}

/// Noise-free hand shape for `letter`.
pub fn canonical(letter: Letter) -> LandmarkSet {
    let h = HandBuilder::new();
    let h = match letter {
        Letter::A => h.fist().thumb(THUMB_A),
        Letter::B => h,
        Letter::C => {
            let h = Finger::FOUR.into_iter().fold(h, |b, f| {
                let x = column(f);
                b.finger(
                    f,
                    [(x, 200.0), (x - 10.0, 165.0), (x - 40.0, 155.0), (x - 55.0, 150.0)],
                )
            });
            h.thumb(THUMB_AWAY)
        }
        Letter::D => h
            .fist()
            .up(Finger::Index)
            .thumb([(70.0, 270.0), (75.0, 245.0), (85.0, 230.0), (90.0, 210.0)]),
        Letter::E => h
            .fist()
            .thumb([(70.0, 270.0), (75.0, 245.0), (85.0, 225.0), (100.0, 210.0)]),
        Letter::F => h
            .curled(Finger::Index)
            .thumb([(70.0, 270.0), (50.0, 245.0), (55.0, 225.0), (58.0, 208.0)]),
        Letter::G => h.fist().finger(Finger::Index, INDEX_SIDEWAYS),
        Letter::H => h.fist().finger(Finger::Index, INDEX_SIDEWAYS).finger(
            Finger::Middle,
            [(90.0, 200.0), (60.0, 210.0), (40.0, 212.0), (25.0, 213.0)],
        ),
        Letter::I => h.fist().up(Finger::Little),
        Letter::J => h
            .fist()
            .finger(
                Finger::Little,
                [(150.0, 200.0), (180.0, 190.0), (182.0, 160.0), (183.0, 135.0)],
            )
            .thumb(THUMB_A),
        Letter::K => h
            .fist()
            .finger(Finger::Index, INDEX_SPLAYED)
            .finger(Finger::Middle, MIDDLE_SPLAYED)
            .thumb([(70.0, 270.0), (65.0, 240.0), (70.0, 215.0), (75.0, 190.0)]),
        Letter::L => h.fist().up(Finger::Index).thumb(THUMB_AWAY),
        Letter::M => h
            .fist()
            .thumb([(70.0, 270.0), (50.0, 245.0), (40.0, 225.0), (25.0, 222.0)]),
        Letter::N => h
            .fist()
            .thumb([(70.0, 270.0), (75.0, 245.0), (90.0, 215.0), (100.0, 195.0)]),
        Letter::O => h
            .fist()
            .finger(
                Finger::Index,
                [(60.0, 200.0), (60.0, 170.0), (75.0, 160.0), (80.0, 175.0)],
            )
            .thumb([(70.0, 270.0), (40.0, 240.0), (70.0, 230.0), (85.0, 185.0)]),
        Letter::P => h
            .fist()
            .finger(Finger::Index, INDEX_SIDEWAYS)
            .finger(
                Finger::Middle,
                [(90.0, 200.0), (90.0, 230.0), (90.0, 255.0), (90.0, 275.0)],
            )
            .thumb([(70.0, 270.0), (60.0, 240.0), (65.0, 255.0), (70.0, 270.0)]),
        Letter::Q => h
            .curled(Finger::Index)
            .curled(Finger::Middle)
            .thumb([(70.0, 270.0), (60.0, 280.0), (60.0, 300.0), (60.0, 320.0)]),
        Letter::R => h
            .fist()
            .finger(
                Finger::Index,
                [(60.0, 200.0), (70.0, 160.0), (85.0, 130.0), (95.0, 105.0)],
            )
            .finger(
                Finger::Middle,
                [(90.0, 200.0), (88.0, 160.0), (86.0, 130.0), (85.0, 105.0)],
            )
            .thumb(THUMB_OVER_RING),
        Letter::S => h
            .fist()
            .thumb([(70.0, 270.0), (50.0, 240.0), (50.0, 205.0), (55.0, 180.0)]),
        Letter::T => h
            .fist()
            .thumb([(70.0, 270.0), (60.0, 240.0), (65.0, 215.0), (75.0, 195.0)]),
        Letter::U => h
            .curled(Finger::Ring)
            .curled(Finger::Little)
            .thumb(THUMB_OVER_RING),
        Letter::V => h
            .fist()
            .finger(Finger::Index, INDEX_SPLAYED)
            .finger(Finger::Middle, MIDDLE_SPLAYED)
            .thumb(THUMB_OVER_RING),
        Letter::W => h.curled(Finger::Little),
        Letter::X => h.fist().finger(
            Finger::Index,
            [(60.0, 200.0), (60.0, 165.0), (85.0, 155.0), (95.0, 150.0)],
        ),
        Letter::Y => h.fist().up(Finger::Little).thumb(THUMB_AWAY),
    };
    h.build()
}

/// Four fingers splayed wide, thumb out: no letter, but a spread hand.
pub fn spread_hand() -> LandmarkSet {
    HandBuilder::new()
        .thumb(THUMB_AWAY)
        .finger(
            Finger::Index,
            [(60.0, 200.0), (40.0, 160.0), (28.0, 130.0), (20.0, 105.0)],
        )
        .finger(
            Finger::Middle,
            [(90.0, 200.0), (85.0, 160.0), (82.0, 130.0), (80.0, 105.0)],
        )
        .finger(
            Finger::Ring,
            [(120.0, 200.0), (130.0, 160.0), (136.0, 130.0), (140.0, 105.0)],
        )
        .finger(
            Finger::Little,
            [(150.0, 200.0), (175.0, 160.0), (190.0, 130.0), (200.0, 105.0)],
        )
        .build()
}

/// Hooked index, middle and ring (middle segment up, tip down) with an A
/// thumb: satisfies both the four-fingers-down and the W guards.
pub fn hooked_fist() -> LandmarkSet {
    let hooked = |x: f32| [(x, 200.0), (x, 170.0), (x, 140.0), (x, 150.0)];
    HandBuilder::new()
        .thumb(THUMB_A)
        .finger(Finger::Index, hooked(60.0))
        .finger(Finger::Middle, hooked(90.0))
        .finger(Finger::Ring, hooked(120.0))
        .curled(Finger::Little)
        .build()
}

/// Every joint on one spot: no rule fires.
pub fn blank_hand() -> LandmarkSet {
    LandmarkSet::new([Point::new(10.0, 10.0); 21]).expect("finite")
}
