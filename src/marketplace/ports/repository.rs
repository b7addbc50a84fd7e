//! Repository port for marketplace entity collections.

use crate::marketplace::domain::{Entity, EntityKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for collection operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD contract over one entity collection.
///
/// Every operation returns owned copies; callers never share state with the
/// backing store.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Returns every entity in insertion order.
    async fn get_all(&self) -> StoreResult<Vec<E>>;

    /// Finds an entity by identifier.
    ///
    /// Returns `None` when the entity does not exist.
    async fn get_by_id(&self, id: &E::Id) -> StoreResult<Option<E>>;

    /// Returns every entity matching `predicate`, in insertion order.
    async fn find_where(
        &self,
        predicate: &(dyn for<'r> Fn(&'r E) -> bool + Send + Sync),
    ) -> StoreResult<Vec<E>>;

    /// Creates an entity, assigning its identifier and creation timestamp.
    async fn create(&self, draft: E::Draft) -> StoreResult<E>;

    /// Shallow-merges `patch` into an existing entity and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the entity does not exist.
    async fn update(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E>;

    /// Removes an entity and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the entity does not exist.
    async fn delete(&self, id: &E::Id) -> StoreResult<E>;
}

/// Errors returned by collection implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No entity of `kind` has identifier `id`.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Collection searched.
        kind: EntityKind,
        /// Identifier requested.
        id: String,
    },

    /// Seed data for a collection could not be read.
    #[error("invalid {kind} fixture: {source}")]
    Fixture {
        /// Collection being seeded.
        kind: EntityKind,
        /// Underlying decoding failure.
        source: Arc<serde_json::Error>,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Builds a not-found error for an entity of type `E`.
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            kind: E::KIND,
            id: id.to_string(),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for [`StoreError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
