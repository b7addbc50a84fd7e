//! Randomised tracking simulator.

use chrono::TimeDelta;
use rand::Rng;

use crate::marketplace::domain::GeoPoint;
use crate::tracking::ports::{
    LIVE_POSITION_JITTER, MAX_ARRIVAL_MINUTES, MIN_ARRIVAL_MINUTES, TrackingSimulator,
};

/// Draws arrival offsets and positions from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTrackingSimulator;

impl RandomTrackingSimulator {
    /// Creates the simulator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TrackingSimulator for RandomTrackingSimulator {
    fn arrival_offset(&self) -> TimeDelta {
        let minutes = rand::thread_rng().gen_range(MIN_ARRIVAL_MINUTES..MAX_ARRIVAL_MINUTES);
        TimeDelta::minutes(minutes)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "coordinates are offset by a bounded random drift"
    )]
    fn live_position(&self, around: GeoPoint) -> GeoPoint {
        let mut rng = rand::thread_rng();
        GeoPoint::new(
            around.latitude + rng.gen_range(-LIVE_POSITION_JITTER..LIVE_POSITION_JITTER),
            around.longitude + rng.gen_range(-LIVE_POSITION_JITTER..LIVE_POSITION_JITTER),
        )
    }
}
