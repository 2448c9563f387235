//! Empirically tuned decision boundaries.
//!
//! These values define which hand shapes are recognised as which letter.
//! They are kept in one place so the tuning is auditable; changing any of
//! them changes recognition results.

use std::time::Duration;

/// Fraction of the reference distance under which two points are "touching".
///
/// The reference distance is the thumb tip to thumb IP segment length.
pub const TOUCHING_RATIO: f32 = 0.5;

/// Multiple of the reference distance under which two points are "close".
pub const CLOSE_RATIO: f32 = 1.0;

/// Upper bound (in reference distances) of the open thumb/index gap of a C.
pub const C_SPACING_MAX_RATIO: f32 = 2.0;

/// Two fingers are together while their tip gap is at most this multiple of
/// their MCP gap (horizontal components only).
pub const TOGETHER_SPREAD_RATIO: f32 = 1.2;

/// A curled index tip lies closer to its MCP than this multiple of the
/// PIP-to-MCP length.
pub const CURL_REACH_MAX_RATIO: f32 = 2.5;

/// Fingertips touch the palm when within this multiple of the pinch
/// distance from the thumb CMC.
pub const PALM_TOUCH_PINCH_MULTIPLIER: f32 = 2.0;

/// Maximum wrist-centred angle between two fingertips that still counts as
/// touching, in degrees.
pub const TOUCHING_MAX_ANGLE_DEG: f32 = 25.0;

/// Confidence a wrist or fingertip landmark must exceed to be used.
pub const TIP_CONFIDENCE_MIN: f32 = 0.5;

/// Confidence an inner joint (CMC, MP, IP, MCP, PIP, DIP) must exceed.
pub const JOINT_CONFIDENCE_MIN: f32 = 0.3;

/// Default pinch distance, in landmark coordinate units.
pub const DEFAULT_PINCH_MAX_DISTANCE: f32 = 50.0;

/// Default number of consecutive agreeing frames before a state commits.
pub const DEFAULT_EVIDENCE_TRIGGER: u32 = 10;

/// Default time without a usable detection before the classifier resets.
pub const DEFAULT_DETECTION_TIMEOUT: Duration = Duration::from_secs(2);
