//! Domain model for task creation.
//!
//! The flow is a value object: it holds the draft and the current step, and
//! every transition goes through [`TaskCreationFlow::apply`]. It never talks
//! to storage itself.

mod error;
mod flow;

pub use error::ValidationError;
pub use flow::{FlowEvent, FlowStep, TaskCreationFlow, TaskDraft, TaskSubmission};
