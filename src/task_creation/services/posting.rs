//! Final submission of a reviewed task.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::MarketplaceConfig;
use crate::marketplace::{
    domain::{GeoPoint, Task, UserId},
    ports::{EntityRepository, StoreError},
};
use crate::task_creation::domain::{TaskCreationFlow, TaskSubmission, ValidationError};

/// Service-level errors for task posting.
#[derive(Debug, Error)]
pub enum PostingError {
    /// The flow was not ready to post, or moved on while the task was being
    /// created.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The task collection rejected the new task. The flow stays at the
    /// review step so the caller can try again.
    #[error("failed to post task: {0}")]
    Submission(#[source] StoreError),
}

/// Result type for task posting operations.
pub type PostingResult<T> = Result<T, PostingError>;

/// Creates tasks from completed creation flows on behalf of the current
/// customer.
#[derive(Clone)]
pub struct TaskPostingService<R>
where
    R: EntityRepository<Task>,
{
    tasks: Arc<R>,
    customer: UserId,
    default_location: GeoPoint,
}

impl<R> TaskPostingService<R>
where
    R: EntityRepository<Task>,
{
    /// Creates a posting service writing to `tasks`.
    #[must_use]
    pub fn new(tasks: Arc<R>, config: &MarketplaceConfig) -> Self {
        Self {
            tasks,
            customer: config.current_customer.clone(),
            default_location: config.default_location,
        }
    }

    /// Starts a new creation flow at the configured default location.
    #[must_use]
    pub fn start_flow(&self) -> TaskCreationFlow {
        TaskCreationFlow::new(self.default_location)
    }

    /// Creates the task described by `submission`.
    ///
    /// The flow that produced the submission is not touched; pair this with
    /// [`TaskCreationFlow::complete_submission`] once the result arrives.
    ///
    /// # Errors
    ///
    /// Returns [`PostingError::Submission`] when the repository rejects the
    /// task.
    pub async fn post(&self, submission: TaskSubmission) -> PostingResult<Task> {
        self.tasks
            .create(submission.into_task())
            .await
            .map_err(|err| {
                warn!(error = %err, "task submission rejected");
                PostingError::Submission(err)
            })
    }

    /// Posts the task reviewed in `flow` and moves the flow to its terminal
    /// step.
    ///
    /// # Errors
    ///
    /// Returns [`PostingError::Validation`] when the flow is not reviewing a
    /// quote, or [`PostingError::Submission`] when the repository rejects the
    /// task. The flow is unchanged on error.
    pub async fn submit(&self, flow: &mut TaskCreationFlow) -> PostingResult<Task> {
        let submission = flow.prepare_submission(&self.customer)?;
        let revision = submission.revision();
        let task = self.post(submission).await?;
        flow.complete_submission(revision, task.id().clone())?;
        info!(
            task_id = %task.id(),
            category = %task.category(),
            estimated_price = task.estimated_price().unwrap_or_default(),
            "task posted"
        );
        Ok(task)
    }
}
