//! User aggregate: customers and the professionals they hire.

use super::{Category, Entity, EntityKind, ParseAvailabilityError, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserKind {
    /// Posts tasks.
    Customer,
    /// Quotes on and performs tasks.
    Pro,
}

/// When a professional can take new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    /// Free right now.
    Available,
    /// Free later today.
    Today,
    /// Free within the week.
    ThisWeek,
    /// Takes bookings by appointment.
    Scheduled,
}

impl Availability {
    /// Every availability state, soonest first.
    pub const ALL: [Self; 4] = [Self::Available, Self::Today, Self::ThisWeek, Self::Scheduled];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Today => "today",
            Self::ThisWeek => "thisWeek",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Availability {
    type Error = ParseAvailabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "");
        Self::ALL
            .into_iter()
            .find(|availability| availability.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseAvailabilityError(value.to_owned()))
    }
}

/// Trust checks completed for an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    /// Identity verified.
    pub verified: bool,
    /// Background check passed.
    pub background_check: bool,
    /// Trade licence verified.
    pub license_verified: bool,
}

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    #[serde(rename = "type")]
    kind: UserKind,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    completed_jobs: u32,
    #[serde(default)]
    verification_status: VerificationStatus,
    #[serde(default)]
    skills: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the account type.
    #[must_use]
    pub const fn kind(&self) -> UserKind {
        self.kind
    }

    /// Returns `true` for professional accounts.
    #[must_use]
    pub fn is_pro(&self) -> bool {
        self.kind == UserKind::Pro
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the average rating.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns the number of completed jobs.
    #[must_use]
    pub const fn completed_jobs(&self) -> u32 {
        self.completed_jobs
    }

    /// Returns the verification checks.
    #[must_use]
    pub const fn verification_status(&self) -> VerificationStatus {
        self.verification_status
    }

    /// Returns the advertised skills.
    #[must_use]
    pub const fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    /// Returns `true` when the skill set covers `category`.
    #[must_use]
    pub fn has_skill(&self, category: Category) -> bool {
        self.skills.contains(category.as_str())
    }

    /// Returns the availability state, for professionals.
    #[must_use]
    pub const fn availability(&self) -> Option<Availability> {
        self.availability
    }

    /// Returns the distance from the customer in miles, if known.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Caller-supplied fields for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    kind: UserKind,
    name: String,
    email: Option<String>,
    rating: Option<f64>,
    completed_jobs: Option<u32>,
    verification_status: Option<VerificationStatus>,
    skills: BTreeSet<String>,
    availability: Option<Availability>,
    distance: Option<f64>,
}

impl NewUser {
    /// Creates a payload with the required user fields.
    #[must_use]
    pub fn new(kind: UserKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            email: None,
            rating: None,
            completed_jobs: None,
            verification_status: None,
            skills: BTreeSet::new(),
            availability: None,
            distance: None,
        }
    }

    /// Sets the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Overrides the default zero rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Overrides the default zero completed-job count.
    #[must_use]
    pub const fn with_completed_jobs(mut self, completed_jobs: u32) -> Self {
        self.completed_jobs = Some(completed_jobs);
        self
    }

    /// Overrides the default all-false verification checks.
    #[must_use]
    pub const fn with_verification_status(mut self, status: VerificationStatus) -> Self {
        self.verification_status = Some(status);
        self
    }

    /// Sets the advertised skills.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.skills = skills.into_iter().collect();
        self
    }

    /// Sets the availability state.
    #[must_use]
    pub const fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Sets the distance from the customer in miles.
    #[must_use]
    pub const fn with_distance(mut self, miles: f64) -> Self {
        self.distance = Some(miles);
        self
    }
}

/// Fields shallow-merged into an existing user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    name: Option<String>,
    email: Option<String>,
    rating: Option<f64>,
    completed_jobs: Option<u32>,
    verification_status: Option<VerificationStatus>,
    skills: Option<BTreeSet<String>>,
    availability: Option<Availability>,
}

impl UserPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replaces the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Replaces the completed-job count.
    #[must_use]
    pub const fn with_completed_jobs(mut self, completed_jobs: u32) -> Self {
        self.completed_jobs = Some(completed_jobs);
        self
    }

    /// Replaces the verification checks.
    #[must_use]
    pub const fn with_verification_status(mut self, status: VerificationStatus) -> Self {
        self.verification_status = Some(status);
        self
    }

    /// Replaces the skill set.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.skills = Some(skills.into_iter().collect());
        self
    }

    /// Replaces the availability state.
    #[must_use]
    pub const fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }
}

impl Entity for User {
    type Id = UserId;
    type Draft = NewUser;
    type Patch = UserPatch;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_draft(id: UserId, created_at: DateTime<Utc>, draft: NewUser) -> Self {
        Self {
            id,
            kind: draft.kind,
            name: draft.name,
            email: draft.email,
            rating: draft.rating.unwrap_or_default(),
            completed_jobs: draft.completed_jobs.unwrap_or_default(),
            verification_status: draft.verification_status.unwrap_or_default(),
            skills: draft.skills,
            availability: draft.availability,
            distance: draft.distance,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(completed_jobs) = patch.completed_jobs {
            self.completed_jobs = completed_jobs;
        }
        if let Some(status) = patch.verification_status {
            self.verification_status = status;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(availability) = patch.availability {
            self.availability = Some(availability);
        }
    }
}
