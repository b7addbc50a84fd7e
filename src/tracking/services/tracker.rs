//! Loading tracked jobs and recording their progress.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{info, warn};

use crate::marketplace::{
    domain::{GeoPoint, Job, JobId, JobPatch, JobStage, Task, TaskId, TaskPatch, TaskStatus, User},
    ports::{EntityRepository, StoreError},
    services::{JobCollection, MarketplaceStore, TaskCollection, UserCollection},
};
use crate::tracking::{
    domain::{PipelineProgress, TrackableStatus, TrackingView},
    ports::TrackingSimulator,
};

/// Service-level errors for job tracking.
#[derive(Debug, Error)]
pub enum TrackingServiceError {
    /// A collection operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The requested stage is behind the job's current stage.
    #[error("job cannot move back from {from} to {to}")]
    BackwardTransition {
        /// Stage the job is at.
        from: JobStage,
        /// Stage that was requested.
        to: JobStage,
    },
}

/// Result type for job tracking operations.
pub type TrackingResult<T> = Result<T, TrackingServiceError>;

/// A task together with its job, professional, and derived tracking view.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedJob {
    /// The customer's task.
    pub task: Task,
    /// The job created for the task, once a professional accepted it.
    pub job: Option<Job>,
    /// The assigned professional, when known.
    pub pro: Option<User>,
    /// Progress derived from the job stage, or the task status when no job
    /// exists.
    pub view: TrackingView,
}

impl TrackedJob {
    /// Returns the stage the view was derived from.
    #[must_use]
    pub const fn current_stage(&self) -> Option<JobStage> {
        self.view.current_stage()
    }
}

/// Tracking service over task, job, and user collections.
pub struct JobTrackingService<T, J, U, S, C>
where
    T: EntityRepository<Task>,
    J: EntityRepository<Job>,
    U: EntityRepository<User>,
    S: TrackingSimulator,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    jobs: Arc<J>,
    users: Arc<U>,
    simulator: Arc<S>,
    clock: Arc<C>,
}

impl<T, J, U, S, C> Clone for JobTrackingService<T, J, U, S, C>
where
    T: EntityRepository<Task>,
    J: EntityRepository<Job>,
    U: EntityRepository<User>,
    S: TrackingSimulator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            jobs: Arc::clone(&self.jobs),
            users: Arc::clone(&self.users),
            simulator: Arc::clone(&self.simulator),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Tracking service over the collections of a [`MarketplaceStore`].
pub type StoreTrackingService<S, C> =
    JobTrackingService<TaskCollection<C>, JobCollection<C>, UserCollection<C>, S, C>;

impl<S, C> StoreTrackingService<S, C>
where
    S: TrackingSimulator,
    C: Clock + Send + Sync,
{
    /// Creates a tracking service reading from `store`.
    #[must_use]
    pub fn from_store(store: &MarketplaceStore<C>, simulator: Arc<S>, clock: Arc<C>) -> Self {
        Self::new(store.tasks(), store.jobs(), store.users(), simulator, clock)
    }
}

impl<T, J, U, S, C> JobTrackingService<T, J, U, S, C>
where
    T: EntityRepository<Task>,
    J: EntityRepository<Job>,
    U: EntityRepository<User>,
    S: TrackingSimulator,
    C: Clock + Send + Sync,
{
    /// Creates a tracking service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        jobs: Arc<J>,
        users: Arc<U>,
        simulator: Arc<S>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            jobs,
            users,
            simulator,
            clock,
        }
    }

    /// Derives the tracking view for `status` at `location`.
    ///
    /// The simulator is only consulted for the values the stage shows.
    #[must_use]
    pub fn view_for<St: TrackableStatus + ?Sized>(
        &self,
        status: &St,
        location: GeoPoint,
    ) -> TrackingView {
        let progress = PipelineProgress::of(status);
        let mut view = TrackingView::new(progress);
        if progress.is_en_route() {
            let arrival = self
                .clock
                .utc()
                .checked_add_signed(self.simulator.arrival_offset());
            view = arrival.map_or(view, |eta| view.with_estimated_arrival(eta));
        }
        if progress.has_live_position() {
            view = view.with_live_position(self.simulator.live_position(location));
        }
        view
    }

    /// Loads the task, its job and professional, and the current view.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the task does not exist, or the
    /// repository error when a collection cannot be read.
    pub async fn load(&self, task_id: &TaskId) -> TrackingResult<TrackedJob> {
        let task = self
            .tasks
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| StoreError::not_found::<Task>(task_id))?;
        let job = self.job_for(task_id).await?;
        self.assemble(task, job).await
    }

    /// Marks the task and, when one exists, its job as completed.
    ///
    /// The job is written before the task, so a failed job update leaves the
    /// task open and the call can be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the task does not exist, or the
    /// repository error when an update fails.
    pub async fn confirm_completion(&self, task_id: &TaskId) -> TrackingResult<TrackedJob> {
        if self.tasks.get_by_id(task_id).await?.is_none() {
            return Err(StoreError::not_found::<Task>(task_id).into());
        }
        let job = match self.job_for(task_id).await? {
            Some(job) => Some(
                self.jobs
                    .update(job.id(), JobPatch::new().with_status(JobStage::Completed))
                    .await?,
            ),
            None => None,
        };
        let task = self
            .tasks
            .update(task_id, TaskPatch::new().with_status(TaskStatus::Completed))
            .await?;
        info!(%task_id, job_id = ?job.as_ref().map(Job::id), "job completion confirmed");
        self.assemble(task, job).await
    }

    /// Moves a job forward to `stage`.
    ///
    /// Re-applying the current stage is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::BackwardTransition`] when `stage` is
    /// behind the job's current stage, or [`StoreError::NotFound`] when the
    /// job does not exist.
    pub async fn advance_job(&self, job_id: &JobId, stage: JobStage) -> TrackingResult<Job> {
        let job = self
            .jobs
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| StoreError::not_found::<Job>(job_id))?;
        if stage < job.status() {
            warn!(%job_id, from = %job.status(), to = %stage, "backward stage change refused");
            return Err(TrackingServiceError::BackwardTransition {
                from: job.status(),
                to: stage,
            });
        }
        let updated = self
            .jobs
            .update(job_id, JobPatch::new().with_status(stage))
            .await?;
        info!(%job_id, stage = %stage, "job advanced");
        Ok(updated)
    }

    async fn job_for(&self, task_id: &TaskId) -> TrackingResult<Option<Job>> {
        let wanted = task_id.clone();
        let jobs = self
            .jobs
            .find_where(&move |job: &Job| *job.task_id() == wanted)
            .await?;
        Ok(jobs.into_iter().next())
    }

    async fn assemble(&self, task: Task, job: Option<Job>) -> TrackingResult<TrackedJob> {
        let pro_id = job
            .as_ref()
            .map(Job::pro_id)
            .or_else(|| task.pro_id())
            .cloned();
        let pro = match pro_id {
            Some(id) => self.users.get_by_id(&id).await?,
            None => None,
        };
        let view = job.as_ref().map_or_else(
            || self.view_for(&task.status(), task.location()),
            |active| self.view_for(&active.status(), task.location()),
        );
        Ok(TrackedJob {
            task,
            job,
            pro,
            view,
        })
    }
}
