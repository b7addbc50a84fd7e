//! Task aggregate: a customer's request for professional help.

use super::{
    Category, Entity, EntityKind, GeoPoint, ParseTaskStatusError, TaskId, TaskRecordError,
    Urgency, UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::fmt;

/// Maximum number of photos attached to a task.
pub const MAX_TASK_PHOTOS: usize = 3;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Published and waiting for professionals.
    #[default]
    Posted,
    /// A professional has been matched.
    Matched,
    /// Work is under way.
    InProgress,
    /// The customer confirmed completion.
    Completed,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Posted, Self::Matched, Self::InProgress, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posted => "posted",
            Self::Matched => "matched",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

/// Opaque reference to an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Wraps a photo reference.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Split of a price into labour and materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Labour share.
    pub labor: u32,
    /// Materials share.
    pub materials: u32,
}

/// Classification attached to a task by the automated estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiClassification {
    /// Confidence score from 0 to 100.
    pub confidence: u8,
    /// Labour and materials breakdown.
    pub breakdown: CostBreakdown,
}

/// Estimated price together with its classification.
///
/// The two always travel together: a task either has both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEstimate {
    estimated_price: u32,
    ai_classification: AiClassification,
}

impl TaskEstimate {
    /// Pairs a price with its classification.
    #[must_use]
    pub const fn new(estimated_price: u32, ai_classification: AiClassification) -> Self {
        Self {
            estimated_price,
            ai_classification,
        }
    }

    /// Returns the estimated price.
    #[must_use]
    pub const fn estimated_price(&self) -> u32 {
        self.estimated_price
    }

    /// Returns the classification.
    #[must_use]
    pub const fn ai_classification(&self) -> &AiClassification {
        &self.ai_classification
    }
}

/// Task aggregate root.
///
/// Decoding rejects records that carry only one of `estimatedPrice` and
/// `aiClassification`, or a confidence above 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    customer_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pro_id: Option<UserId>,
    category: Category,
    description: String,
    #[serde(default)]
    urgency: Urgency,
    #[serde(default)]
    photos: Vec<PhotoRef>,
    location: GeoPoint,
    #[serde(flatten)]
    estimate: Option<TaskEstimate>,
    #[serde(default)]
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Stored shape of a task, before the estimate pair is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    customer_id: UserId,
    #[serde(default)]
    pro_id: Option<UserId>,
    category: Category,
    description: String,
    #[serde(default)]
    urgency: Urgency,
    #[serde(default)]
    photos: Vec<PhotoRef>,
    location: GeoPoint,
    #[serde(default)]
    estimated_price: Option<u32>,
    #[serde(default)]
    ai_classification: Option<AiClassification>,
    #[serde(default)]
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

const MAX_CONFIDENCE: u8 = 100;

impl TaskRecord {
    fn into_task(self) -> Result<Task, TaskRecordError> {
        let estimate = match (self.estimated_price, self.ai_classification) {
            (None, None) => None,
            (Some(_), None) => {
                return Err(TaskRecordError::IncompleteEstimate {
                    present: "estimatedPrice",
                    missing: "aiClassification",
                });
            }
            (None, Some(_)) => {
                return Err(TaskRecordError::IncompleteEstimate {
                    present: "aiClassification",
                    missing: "estimatedPrice",
                });
            }
            (Some(_), Some(classification)) if classification.confidence > MAX_CONFIDENCE => {
                return Err(TaskRecordError::ConfidenceOutOfRange(
                    classification.confidence,
                ));
            }
            (Some(price), Some(classification)) => Some(TaskEstimate::new(price, classification)),
        };
        Ok(Task {
            id: self.id,
            customer_id: self.customer_id,
            pro_id: self.pro_id,
            category: self.category,
            description: self.description,
            urgency: self.urgency,
            photos: self.photos,
            location: self.location,
            estimate,
            status: self.status,
            created_at: self.created_at,
        })
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TaskRecord::deserialize(deserializer)?
            .into_task()
            .map_err(D::Error::custom)
    }
}

impl Task {
    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the requesting customer.
    #[must_use]
    pub const fn customer_id(&self) -> &UserId {
        &self.customer_id
    }

    /// Returns the matched professional, if any.
    #[must_use]
    pub const fn pro_id(&self) -> Option<&UserId> {
        self.pro_id.as_ref()
    }

    /// Returns the service category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the urgency level.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the attached photos, oldest first.
    #[must_use]
    pub fn photos(&self) -> &[PhotoRef] {
        &self.photos
    }

    /// Returns the job location.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    /// Returns the estimated price, if an estimate was generated.
    #[must_use]
    pub fn estimated_price(&self) -> Option<u32> {
        self.estimate.map(|estimate| estimate.estimated_price())
    }

    /// Returns the automated classification, if an estimate was generated.
    #[must_use]
    pub fn ai_classification(&self) -> Option<&AiClassification> {
        self.estimate
            .as_ref()
            .map(TaskEstimate::ai_classification)
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Caller-supplied fields for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    customer_id: UserId,
    category: Category,
    description: String,
    urgency: Urgency,
    photos: Vec<PhotoRef>,
    location: GeoPoint,
    estimate: Option<TaskEstimate>,
    status: Option<TaskStatus>,
    pro_id: Option<UserId>,
}

impl NewTask {
    /// Creates a payload with the required task fields.
    #[must_use]
    pub fn new(
        customer_id: UserId,
        category: Category,
        description: impl Into<String>,
        location: GeoPoint,
    ) -> Self {
        Self {
            customer_id,
            category,
            description: description.into(),
            urgency: Urgency::default(),
            photos: Vec::new(),
            location,
            estimate: None,
            status: None,
            pro_id: None,
        }
    }

    /// Sets the urgency level.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets the photos, keeping at most [`MAX_TASK_PHOTOS`].
    #[must_use]
    pub fn with_photos(mut self, photos: impl IntoIterator<Item = PhotoRef>) -> Self {
        self.photos = photos.into_iter().take(MAX_TASK_PHOTOS).collect();
        self
    }

    /// Attaches an estimate.
    #[must_use]
    pub const fn with_estimate(mut self, estimate: TaskEstimate) -> Self {
        self.estimate = Some(estimate);
        self
    }

    /// Overrides the default `posted` status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the matched professional.
    #[must_use]
    pub fn with_pro(mut self, pro_id: UserId) -> Self {
        self.pro_id = Some(pro_id);
        self
    }
}

/// Fields shallow-merged into an existing task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    description: Option<String>,
    urgency: Option<Urgency>,
    photos: Option<Vec<PhotoRef>>,
    location: Option<GeoPoint>,
    estimate: Option<TaskEstimate>,
    status: Option<TaskStatus>,
    pro_id: Option<UserId>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the urgency.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Replaces the photos, keeping at most [`MAX_TASK_PHOTOS`].
    #[must_use]
    pub fn with_photos(mut self, photos: impl IntoIterator<Item = PhotoRef>) -> Self {
        self.photos = Some(photos.into_iter().take(MAX_TASK_PHOTOS).collect());
        self
    }

    /// Replaces the location.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Replaces the estimate.
    #[must_use]
    pub const fn with_estimate(mut self, estimate: TaskEstimate) -> Self {
        self.estimate = Some(estimate);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Assigns a professional.
    #[must_use]
    pub fn with_pro(mut self, pro_id: UserId) -> Self {
        self.pro_id = Some(pro_id);
        self
    }
}

impl Entity for Task {
    type Id = TaskId;
    type Draft = NewTask;
    type Patch = TaskPatch;

    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> &TaskId {
        &self.id
    }

    fn from_draft(id: TaskId, created_at: DateTime<Utc>, draft: NewTask) -> Self {
        Self {
            id,
            customer_id: draft.customer_id,
            pro_id: draft.pro_id,
            category: draft.category,
            description: draft.description,
            urgency: draft.urgency,
            photos: draft.photos,
            location: draft.location,
            estimate: draft.estimate,
            status: draft.status.unwrap_or_default(),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(urgency) = patch.urgency {
            self.urgency = urgency;
        }
        if let Some(photos) = patch.photos {
            self.photos = photos;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(estimate) = patch.estimate {
            self.estimate = Some(estimate);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(pro_id) = patch.pro_id {
            self.pro_id = Some(pro_id);
        }
    }
}
