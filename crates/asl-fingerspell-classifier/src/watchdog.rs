use std::time::{Duration, Instant};

use asl_fingerspell_core::thresholds::DEFAULT_DETECTION_TIMEOUT;

/// Tracks how long a hand has been missing.
///
/// Feed it the frame timestamp on every good detection with
/// [`observed`](Self::observed) and on every frame without one with
/// [`missed`](Self::missed). Once the timeout has passed, every missed
/// frame reports `true` until a hand is seen again.
#[derive(Clone, Copy, Debug)]
pub struct DetectionWatchdog {
    timeout: Duration,
    last_seen: Instant,
}

impl DetectionWatchdog {
    /// Start the clock at `now`.
    pub fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            timeout,
            last_seen: now,
        }
    }

    pub fn with_default_timeout(now: Instant) -> Self {
        Self::new(DEFAULT_DETECTION_TIMEOUT, now)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn observed(&mut self, now: Instant) {
        self.last_seen = now;
    }

    /// Time since the last good frame, zero if `now` is earlier.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_seen)
    }

    /// Whether more than the timeout has passed since the last good frame.
    pub fn missed(&self, now: Instant) -> bool {
        self.elapsed(now) > self.timeout
    }
}
