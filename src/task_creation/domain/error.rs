//! Validation errors raised by the task creation flow.

use super::FlowStep;
use thiserror::Error;

/// A flow action was refused. The flow is left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The description is empty or whitespace only.
    #[error("description required")]
    DescriptionRequired,

    /// The action is not available at the current step.
    #[error("cannot {action} while at step {step}")]
    NotAllowed {
        /// Step the flow was at.
        step: FlowStep,
        /// Action that was attempted.
        action: &'static str,
    },

    /// A submission was prepared against an earlier state of the flow.
    #[error("submission prepared at revision {prepared} but flow is at revision {current}")]
    StaleSubmission {
        /// Revision the submission was prepared at.
        prepared: u64,
        /// Revision of the flow when the result arrived.
        current: u64,
    },
}
