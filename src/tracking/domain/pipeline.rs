//! Derivation of pipeline progress from a status value.

use crate::marketplace::domain::{JobStage, TaskStatus};

/// A status that may correspond to a stage of the job pipeline.
pub trait TrackableStatus {
    /// Returns the pipeline stage this status denotes, or `None` when it is
    /// not a pipeline member.
    fn pipeline_stage(&self) -> Option<JobStage>;
}

impl TrackableStatus for JobStage {
    fn pipeline_stage(&self) -> Option<JobStage> {
        Some(*self)
    }
}

impl TrackableStatus for TaskStatus {
    fn pipeline_stage(&self) -> Option<JobStage> {
        match self {
            Self::Completed => Some(JobStage::Completed),
            Self::Posted | Self::Matched | Self::InProgress => None,
        }
    }
}

impl TrackableStatus for str {
    fn pipeline_stage(&self) -> Option<JobStage> {
        JobStage::PIPELINE
            .into_iter()
            .find(|stage| stage.as_str() == self)
    }
}

/// One row of the progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepView {
    /// Stage this row represents.
    pub stage: JobStage,
    /// The stage has been reached.
    pub completed: bool,
    /// The stage is the one currently held.
    pub current: bool,
}

impl StepView {
    /// Returns the display label of the stage.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.stage.label()
    }
}

/// Progress through the pipeline for a single status value.
///
/// Derivation is stateless: moving a status backwards simply yields the
/// progress of the earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineProgress {
    current: Option<JobStage>,
}

impl PipelineProgress {
    /// Derives progress for `status`.
    #[must_use]
    pub fn of<S: TrackableStatus + ?Sized>(status: &S) -> Self {
        Self {
            current: status.pipeline_stage(),
        }
    }

    /// Returns the stage currently held, if the status is in the pipeline.
    #[must_use]
    pub const fn current_stage(&self) -> Option<JobStage> {
        self.current
    }

    /// Returns the index of the current stage, or `None` when nothing has
    /// started.
    #[must_use]
    pub fn current_step_index(&self) -> Option<usize> {
        self.current.map(JobStage::position)
    }

    /// Returns one row per pipeline stage, in order.
    #[must_use]
    pub fn steps(&self) -> [StepView; 5] {
        let index = self.current_step_index();
        JobStage::PIPELINE.map(|stage| StepView {
            stage,
            completed: index.is_some_and(|current| stage.position() <= current),
            current: index == Some(stage.position()),
        })
    }

    /// Returns `true` when the professional is travelling to the site.
    #[must_use]
    pub const fn is_en_route(&self) -> bool {
        matches!(self.current, Some(JobStage::EnRoute))
    }

    /// Returns `true` while the professional's position is worth showing.
    #[must_use]
    pub const fn has_live_position(&self) -> bool {
        matches!(self.current, Some(JobStage::EnRoute | JobStage::OnSite))
    }
}
