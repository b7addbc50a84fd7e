//! Application services for job tracking.

mod live;
mod tracker;

pub use live::{LiveTracking, MIN_REFRESH_PERIOD};
pub use tracker::{
    JobTrackingService, StoreTrackingService, TrackedJob, TrackingResult, TrackingServiceError,
};
