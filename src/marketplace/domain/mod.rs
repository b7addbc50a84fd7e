//! Domain model for the marketplace entities.
//!
//! Tasks, jobs, quotes, and users are plain aggregates. Each implements
//! [`Entity`] so that a single collection adapter can store any of them.

mod category;
mod entity;
mod error;
mod geo;
mod ids;
mod job;
mod quote;
mod task;
mod user;

pub use category::{Category, Urgency};
pub use entity::{Entity, EntityId, EntityKind};
pub use error::{
    ParseAvailabilityError, ParseCategoryError, ParseJobStageError, ParseTaskStatusError,
    ParseUrgencyError, TaskRecordError,
};
pub use geo::GeoPoint;
pub use ids::{JobId, QuoteId, TaskId, UserId};
pub use job::{Job, JobPatch, JobStage, NewJob, PaymentStatus};
pub use quote::{NewQuote, Quote, QuotePatch};
pub use task::{
    AiClassification, CostBreakdown, MAX_TASK_PHOTOS, NewTask, PhotoRef, Task, TaskEstimate,
    TaskPatch, TaskStatus,
};
pub use user::{
    Availability, NewUser, User, UserKind, UserPatch, VerificationStatus,
};
