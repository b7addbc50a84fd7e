//! Tracking view presented for a job.

use chrono::{DateTime, Utc};

use super::{PipelineProgress, StepView};
use crate::marketplace::domain::{GeoPoint, JobStage};

/// Derived tracking state for a task or job.
///
/// The estimated arrival is only ever present while the job is en route, and
/// the live position only while it is en route or on site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingView {
    progress: PipelineProgress,
    estimated_arrival: Option<DateTime<Utc>>,
    live_position: Option<GeoPoint>,
}

impl TrackingView {
    /// Creates a view with no arrival estimate or live position.
    #[must_use]
    pub const fn new(progress: PipelineProgress) -> Self {
        Self {
            progress,
            estimated_arrival: None,
            live_position: None,
        }
    }

    /// Sets the estimated arrival. Ignored unless the job is en route.
    #[must_use]
    pub fn with_estimated_arrival(mut self, arrival: DateTime<Utc>) -> Self {
        if self.progress.is_en_route() {
            self.estimated_arrival = Some(arrival);
        }
        self
    }

    /// Sets the live position. Ignored unless the job is en route or on
    /// site.
    #[must_use]
    pub fn with_live_position(mut self, position: GeoPoint) -> Self {
        if self.progress.has_live_position() {
            self.live_position = Some(position);
        }
        self
    }

    /// Returns the underlying pipeline progress.
    #[must_use]
    pub const fn progress(&self) -> PipelineProgress {
        self.progress
    }

    /// Returns the current stage, if any.
    #[must_use]
    pub const fn current_stage(&self) -> Option<JobStage> {
        self.progress.current_stage()
    }

    /// Returns the index of the current stage, or `None` before the
    /// pipeline has started.
    #[must_use]
    pub fn current_step_index(&self) -> Option<usize> {
        self.progress.current_step_index()
    }

    /// Returns the step rows.
    #[must_use]
    pub fn steps(&self) -> [StepView; 5] {
        self.progress.steps()
    }

    /// Returns the estimated arrival time.
    #[must_use]
    pub const fn estimated_arrival(&self) -> Option<DateTime<Utc>> {
        self.estimated_arrival
    }

    /// Returns the simulated live position.
    #[must_use]
    pub const fn live_position(&self) -> Option<GeoPoint> {
        self.live_position
    }
}
