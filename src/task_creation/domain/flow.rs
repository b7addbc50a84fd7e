//! The task creation state machine.
//!
//! A customer moves through three steps before a task exists:
//!
//! ```text
//! SelectCategory -> DescribeTask -> ReviewQuote -> Posted
//!        ^               |  ^             |
//!        +---- back -----+  +---- back ---+
//! ```
//!
//! Nothing is persisted until the quote is confirmed. Every accepted event
//! bumps the flow's revision so that results computed against an older
//! revision can be recognised and discarded.

use super::ValidationError;
use crate::estimation::{PriceEstimate, estimate};
use crate::marketplace::domain::{
    Category, GeoPoint, MAX_TASK_PHOTOS, NewTask, PhotoRef, TaskId, TaskStatus, Urgency, UserId,
};
use std::fmt;

/// Position of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowStep {
    /// Choosing the kind of work.
    SelectCategory,
    /// Entering description, urgency, and photos.
    DescribeTask,
    /// Reviewing the generated estimate.
    ReviewQuote,
    /// The task has been created.
    Posted,
}

impl FlowStep {
    /// Returns the step name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelectCategory => "select_category",
            Self::DescribeTask => "describe_task",
            Self::ReviewQuote => "review_quote",
            Self::Posted => "posted",
        }
    }
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input driving the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Pick a category and move on to the description step.
    SelectCategory(Category),
    /// Replace the description text.
    SetDescription(String),
    /// Replace the urgency level.
    SetUrgency(Urgency),
    /// Attach photos; anything beyond the third photo is dropped.
    AddPhotos(Vec<PhotoRef>),
    /// Detach the photo at an index. Out-of-range indices are ignored.
    RemovePhoto(usize),
    /// Validate the description and generate the estimate.
    RequestQuote,
    /// Return to the previous step, keeping everything entered.
    Back,
}

impl FlowEvent {
    const fn action(&self) -> &'static str {
        match self {
            Self::SelectCategory(_) => "select a category",
            Self::SetDescription(_) => "edit the description",
            Self::SetUrgency(_) => "change the urgency",
            Self::AddPhotos(_) => "add photos",
            Self::RemovePhoto(_) => "remove a photo",
            Self::RequestQuote => "request a quote",
            Self::Back => "go back",
        }
    }
}

/// Fields collected while the task is being described.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    category: Option<Category>,
    description: String,
    urgency: Urgency,
    photos: Vec<PhotoRef>,
    location: GeoPoint,
}

impl TaskDraft {
    fn new(location: GeoPoint) -> Self {
        Self {
            category: None,
            description: String::new(),
            urgency: Urgency::default(),
            photos: Vec::new(),
            location,
        }
    }

    /// Returns the chosen category, if any.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Returns the description as entered.
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

    /// Returns the task location.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    fn add_photos(&mut self, photos: Vec<PhotoRef>) {
        self.photos.extend(photos);
        self.photos.truncate(MAX_TASK_PHOTOS);
    }

    fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }
}

/// A task ready to be created, tagged with the flow revision it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSubmission {
    task: NewTask,
    revision: u64,
}

impl TaskSubmission {
    /// Returns the flow revision this submission was prepared at.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the creation payload.
    #[must_use]
    pub const fn task(&self) -> &NewTask {
        &self.task
    }

    /// Consumes the submission, returning the creation payload.
    #[must_use]
    pub fn into_task(self) -> NewTask {
        self.task
    }
}

/// Task creation state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCreationFlow {
    step: FlowStep,
    draft: TaskDraft,
    quote: Option<PriceEstimate>,
    posted_task: Option<TaskId>,
    revision: u64,
}

impl TaskCreationFlow {
    /// Starts a flow at category selection with a draft located at
    /// `location`.
    #[must_use]
    pub fn new(location: GeoPoint) -> Self {
        Self {
            step: FlowStep::SelectCategory,
            draft: TaskDraft::new(location),
            quote: None,
            posted_task: None,
            revision: 0,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> FlowStep {
        self.step
    }

    /// Returns the draft fields.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the most recent estimate, if one was generated.
    ///
    /// Going back from the review step keeps the estimate; it is replaced
    /// the next time a quote is requested.
    #[must_use]
    pub const fn quote(&self) -> Option<&PriceEstimate> {
        self.quote.as_ref()
    }

    /// Returns the created task once the flow has reached
    /// [`FlowStep::Posted`].
    #[must_use]
    pub const fn posted_task(&self) -> Option<&TaskId> {
        self.posted_task.as_ref()
    }

    /// Returns the revision counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `event` and returns the resulting step.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the event is not available at the
    /// current step or its input is invalid. The flow is unchanged on error.
    pub fn apply(&mut self, event: FlowEvent) -> Result<FlowStep, ValidationError> {
        let refused = ValidationError::NotAllowed {
            step: self.step,
            action: event.action(),
        };
        match (self.step, event) {
            (FlowStep::SelectCategory, FlowEvent::SelectCategory(category)) => {
                self.draft.category = Some(category);
                self.step = FlowStep::DescribeTask;
            }
            (FlowStep::DescribeTask, FlowEvent::SetDescription(description)) => {
                self.draft.description = description;
            }
            (FlowStep::DescribeTask, FlowEvent::SetUrgency(urgency)) => {
                self.draft.urgency = urgency;
            }
            (FlowStep::DescribeTask, FlowEvent::AddPhotos(photos)) => {
                self.draft.add_photos(photos);
            }
            (FlowStep::DescribeTask, FlowEvent::RemovePhoto(index)) => {
                self.draft.remove_photo(index);
            }
            (FlowStep::DescribeTask, FlowEvent::RequestQuote) => {
                let Some(category) = self.draft.category else {
                    return Err(refused);
                };
                if self.draft.description.trim().is_empty() {
                    return Err(ValidationError::DescriptionRequired);
                }
                self.quote = Some(estimate(category, self.draft.urgency));
                self.step = FlowStep::ReviewQuote;
            }
            (FlowStep::DescribeTask, FlowEvent::Back) => {
                self.step = FlowStep::SelectCategory;
            }
            (FlowStep::ReviewQuote, FlowEvent::Back) => {
                self.step = FlowStep::DescribeTask;
            }
            _ => return Err(refused),
        }
        self.revision = self.revision.saturating_add(1);
        Ok(self.step)
    }

    /// Chooses a category.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn select_category(&mut self, category: Category) -> Result<FlowStep, ValidationError> {
        self.apply(FlowEvent::SelectCategory(category))
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<FlowStep, ValidationError> {
        self.apply(FlowEvent::SetDescription(description.into()))
    }

    /// Replaces the urgency level.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn set_urgency(&mut self, urgency: Urgency) -> Result<FlowStep, ValidationError> {
        self.apply(FlowEvent::SetUrgency(urgency))
    }

    /// Attaches photos, keeping the oldest three.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn add_photos(
        &mut self,
        photos: impl IntoIterator<Item = PhotoRef>,
    ) -> Result<FlowStep, ValidationError> {
        self.apply(FlowEvent::AddPhotos(photos.into_iter().collect()))
    }

    /// Validates the draft and generates the estimate.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DescriptionRequired`] for a blank
    /// description; see also [`Self::apply`].
    pub fn request_quote(&mut self) -> Result<FlowStep, ValidationError> {
        self.apply(FlowEvent::RequestQuote)
    }

    /// Returns to the previous step.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn back(&mut self) -> Result<FlowStep, ValidationError> {
        self.apply(FlowEvent::Back)
    }

    /// Builds the task to create for `customer_id` from the reviewed quote.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAllowed`] unless the flow is reviewing
    /// a quote.
    pub fn prepare_submission(
        &self,
        customer_id: &UserId,
    ) -> Result<TaskSubmission, ValidationError> {
        let refused = ValidationError::NotAllowed {
            step: self.step,
            action: "post the task",
        };
        if self.step != FlowStep::ReviewQuote {
            return Err(refused);
        }
        let (Some(category), Some(quote)) = (self.draft.category, self.quote.as_ref()) else {
            return Err(refused);
        };

        let task = NewTask::new(
            customer_id.clone(),
            category,
            self.draft.description.as_str(),
            self.draft.location,
        )
        .with_urgency(self.draft.urgency)
        .with_photos(self.draft.photos.iter().cloned())
        .with_estimate(quote.to_task_estimate())
        .with_status(TaskStatus::Posted);

        Ok(TaskSubmission {
            task,
            revision: self.revision,
        })
    }

    /// Records that the submission prepared at `revision` created `task_id`,
    /// moving the flow to [`FlowStep::Posted`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StaleSubmission`] when the flow has changed
    /// since the submission was prepared.
    pub fn complete_submission(
        &mut self,
        revision: u64,
        task_id: TaskId,
    ) -> Result<(), ValidationError> {
        if revision != self.revision || self.step != FlowStep::ReviewQuote {
            return Err(ValidationError::StaleSubmission {
                prepared: revision,
                current: self.revision,
            });
        }
        self.posted_task = Some(task_id);
        self.step = FlowStep::Posted;
        self.revision = self.revision.saturating_add(1);
        Ok(())
    }
}
