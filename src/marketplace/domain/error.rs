//! Error types for parsing marketplace enumerations.

use thiserror::Error;

/// Error returned while parsing a task category.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task category: {0}")]
pub struct ParseCategoryError(pub String);

/// Error returned while parsing a task urgency.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct ParseUrgencyError(pub String);

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a job pipeline stage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown job stage: {0}")]
pub struct ParseJobStageError(pub String);

/// Error returned while parsing a professional availability state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown availability: {0}")]
pub struct ParseAvailabilityError(pub String);

/// Error returned when a stored task record is internally inconsistent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRecordError {
    /// Only one half of the estimate pair is present.
    #[error("task record has {present} without {missing}")]
    IncompleteEstimate {
        /// Field that was present.
        present: &'static str,
        /// Field that was absent.
        missing: &'static str,
    },
    /// The classification confidence is not a percentage.
    #[error("classification confidence {0} exceeds 100")]
    ConfidenceOutOfRange(u8),
}
