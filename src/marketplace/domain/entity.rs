//! Contract shared by every entity kind held in a marketplace collection.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::fmt;
use std::hash::Hash;

/// Names the four entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Customer task requests.
    Task,
    /// Customer and professional accounts.
    User,
    /// Professional price offers.
    Quote,
    /// Matched jobs tracked through the execution pipeline.
    Job,
}

impl EntityKind {
    /// Returns the lowercase kind name, also used as the identifier prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::User => "user",
            Self::Quote => "quote",
            Self::Job => "job",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier assigned by a collection when an entity is created.
pub trait EntityId:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Generates a fresh, unique identifier.
    fn generate() -> Self;
}

/// An entity stored in a marketplace collection.
///
/// `Draft` carries the caller-supplied fields for `create`; the collection
/// assigns the identifier and creation timestamp. `Patch` carries the fields
/// shallow-merged by `update`.
pub trait Entity: Clone + fmt::Debug + DeserializeOwned + Send + Sync + 'static {
    /// Identifier type.
    type Id: EntityId;
    /// Creation payload.
    type Draft: Send + 'static;
    /// Partial update payload.
    type Patch: Send + 'static;

    /// Collection this entity lives in.
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Materializes a new entity, merging kind defaults with `draft`.
    fn from_draft(id: Self::Id, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow-merges `patch` into this entity.
    fn apply_patch(&mut self, patch: Self::Patch);
}
