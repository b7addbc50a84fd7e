//! Deterministic tracking simulator.

use chrono::TimeDelta;

use crate::marketplace::domain::GeoPoint;
use crate::tracking::ports::{MIN_ARRIVAL_MINUTES, TrackingSimulator};

/// Returns the same arrival offset every time and reports the professional
/// exactly at the task location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTrackingSimulator {
    arrival_minutes: i64,
}

impl FixedTrackingSimulator {
    /// Creates a simulator reporting arrival in `arrival_minutes`.
    #[must_use]
    pub const fn new(arrival_minutes: i64) -> Self {
        Self { arrival_minutes }
    }
}

impl Default for FixedTrackingSimulator {
    fn default() -> Self {
        Self::new(MIN_ARRIVAL_MINUTES)
    }
}

impl TrackingSimulator for FixedTrackingSimulator {
    fn arrival_offset(&self) -> TimeDelta {
        TimeDelta::minutes(self.arrival_minutes)
    }

    fn live_position(&self, around: GeoPoint) -> GeoPoint {
        around
    }
}
