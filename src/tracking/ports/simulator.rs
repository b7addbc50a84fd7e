//! Source of simulated tracking values.

use chrono::TimeDelta;

use crate::marketplace::domain::GeoPoint;

/// Shortest simulated travel time, in minutes.
pub const MIN_ARRIVAL_MINUTES: i64 = 10;

/// Upper bound (exclusive) of the simulated travel time, in minutes.
pub const MAX_ARRIVAL_MINUTES: i64 = 40;

/// Largest simulated drift of a live position from the task location, in
/// degrees per axis.
pub const LIVE_POSITION_JITTER: f64 = 0.005;

/// Produces the placeholder values shown while a professional is on the
/// way.
///
/// Implementations must keep arrival offsets within
/// [`MIN_ARRIVAL_MINUTES`]..[`MAX_ARRIVAL_MINUTES`] and positions within
/// [`LIVE_POSITION_JITTER`] of `around` on each axis.
pub trait TrackingSimulator: Send + Sync {
    /// Returns the time until the professional arrives.
    fn arrival_offset(&self) -> TimeDelta;

    /// Returns the professional's position near `around`.
    fn live_position(&self, around: GeoPoint) -> GeoPoint;
}
