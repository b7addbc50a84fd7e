//! Job aggregate: a task matched to a professional and tracked to completion.

use super::{Entity, EntityKind, JobId, ParseJobStageError, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a job in the execution pipeline.
///
/// Variants are declared in pipeline order, so the derived ordering matches
/// progress through the pipeline.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum JobStage {
    /// The professional accepted the job.
    #[default]
    Accepted,
    /// The professional is travelling to the site.
    EnRoute,
    /// The professional has arrived.
    OnSite,
    /// Work is in progress.
    Working,
    /// The job is finished.
    Completed,
}

impl JobStage {
    /// The fixed, ordered execution pipeline.
    pub const PIPELINE: [Self; 5] = [
        Self::Accepted,
        Self::EnRoute,
        Self::OnSite,
        Self::Working,
        Self::Completed,
    ];

    /// Returns the zero-based position of this stage in [`Self::PIPELINE`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Accepted => 0,
            Self::EnRoute => 1,
            Self::OnSite => 2,
            Self::Working => 3,
            Self::Completed => 4,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::EnRoute => "enRoute",
            Self::OnSite => "onSite",
            Self::Working => "working",
            Self::Completed => "completed",
        }
    }

    /// Returns the label shown for this stage.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Job Accepted",
            Self::EnRoute => "En Route",
            Self::OnSite => "On Site",
            Self::Working => "Working",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for JobStage {
    type Error = ParseJobStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "");
        Self::PIPELINE
            .into_iter()
            .find(|stage| stage.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseJobStageError(value.to_owned()))
    }
}

/// Payment state of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    /// Nothing has been paid yet.
    Pending,
    /// The customer paid the deposit.
    #[default]
    DepositPaid,
    /// Paid in full.
    Paid,
    /// Payment was returned to the customer.
    Refunded,
}

/// Job aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    id: JobId,
    task_id: TaskId,
    pro_id: UserId,
    #[serde(default)]
    status: JobStage,
    #[serde(default)]
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl Job {
    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> &JobId {
        &self.id
    }

    /// Returns the task this job fulfils.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the matched professional.
    #[must_use]
    pub const fn pro_id(&self) -> &UserId {
        &self.pro_id
    }

    /// Returns the pipeline stage.
    #[must_use]
    pub const fn status(&self) -> JobStage {
        self.status
    }

    /// Returns the payment state.
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Caller-supplied fields for creating a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    task_id: TaskId,
    pro_id: UserId,
    status: Option<JobStage>,
    payment_status: Option<PaymentStatus>,
}

impl NewJob {
    /// Creates a payload linking a task to a professional.
    #[must_use]
    pub const fn new(task_id: TaskId, pro_id: UserId) -> Self {
        Self {
            task_id,
            pro_id,
            status: None,
            payment_status: None,
        }
    }

    /// Overrides the default `accepted` stage.
    #[must_use]
    pub const fn with_status(mut self, status: JobStage) -> Self {
        self.status = Some(status);
        self
    }

    /// Overrides the default `depositPaid` payment state.
    #[must_use]
    pub const fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = Some(payment_status);
        self
    }
}

/// Fields shallow-merged into an existing job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPatch {
    status: Option<JobStage>,
    payment_status: Option<PaymentStatus>,
}

impl JobPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pipeline stage.
    #[must_use]
    pub const fn with_status(mut self, status: JobStage) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the payment state.
    #[must_use]
    pub const fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = Some(payment_status);
        self
    }
}

impl Entity for Job {
    type Id = JobId;
    type Draft = NewJob;
    type Patch = JobPatch;

    const KIND: EntityKind = EntityKind::Job;

    fn id(&self) -> &JobId {
        &self.id
    }

    fn from_draft(id: JobId, created_at: DateTime<Utc>, draft: NewJob) -> Self {
        Self {
            id,
            task_id: draft.task_id,
            pro_id: draft.pro_id,
            status: draft.status.unwrap_or_default(),
            payment_status: draft.payment_status.unwrap_or_default(),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: JobPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(payment_status) = patch.payment_status {
            self.payment_status = payment_status;
        }
    }
}
