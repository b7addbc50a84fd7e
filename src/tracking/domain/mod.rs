//! Domain model for job tracking.

mod pipeline;
mod view;

pub use pipeline::{PipelineProgress, StepView, TrackableStatus};
pub use view::TrackingView;
