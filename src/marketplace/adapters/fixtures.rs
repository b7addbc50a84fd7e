//! Seed data for in-memory collections.

use crate::marketplace::{
    domain::{Entity, Job, Quote, Task, User},
    ports::{StoreError, StoreResult},
};
use std::sync::Arc;

/// Entity kinds that ship with an embedded JSON fixture.
pub trait Fixture: Entity {
    /// JSON array of records loaded when the collection is first touched.
    const FIXTURE: &'static str;
}

impl Fixture for Task {
    const FIXTURE: &'static str = include_str!("../../../fixtures/tasks.json");
}

impl Fixture for User {
    const FIXTURE: &'static str = include_str!("../../../fixtures/users.json");
}

impl Fixture for Quote {
    const FIXTURE: &'static str = include_str!("../../../fixtures/quotes.json");
}

impl Fixture for Job {
    const FIXTURE: &'static str = include_str!("../../../fixtures/jobs.json");
}

/// Initial contents of a collection, materialized on first access.
#[derive(Debug, Clone)]
pub enum Seed<E> {
    /// Start with no records.
    Empty,
    /// Start with the given records.
    Records(Vec<E>),
    /// Decode the records from a JSON array.
    Json(&'static str),
}

impl<E: Fixture> Seed<E> {
    /// Returns the embedded fixture for `E`.
    #[must_use]
    pub const fn fixture() -> Self {
        Self::Json(E::FIXTURE)
    }
}

impl<E: Entity> Seed<E> {
    /// Produces the seed records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Fixture`] when JSON seed data does not decode.
    pub fn load(&self) -> StoreResult<Vec<E>> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Records(records) => Ok(records.clone()),
            Self::Json(raw) => serde_json::from_str(raw).map_err(|err| StoreError::Fixture {
                kind: E::KIND,
                source: Arc::new(err),
            }),
        }
    }
}
