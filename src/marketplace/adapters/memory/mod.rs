//! In-memory collection adapter.
//!
//! A collection starts unloaded and materializes its [`Seed`] on first
//! access. Each operation waits out the configured simulated latency before
//! touching the records, then hands back copies.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::debug;

use crate::config::LatencyProfile;
use crate::marketplace::{
    adapters::fixtures::{Fixture, Seed},
    domain::{Entity, EntityId},
    ports::{EntityRepository, StoreError, StoreResult},
};

/// Thread-safe in-memory collection of one entity kind.
#[derive(Debug)]
pub struct InMemoryCollection<E: Entity, C> {
    state: Arc<RwLock<CollectionState<E>>>,
    clock: Arc<C>,
    latency: LatencyProfile,
}

impl<E: Entity, C> Clone for InMemoryCollection<E, C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
            latency: self.latency,
        }
    }
}

#[derive(Debug)]
struct CollectionState<E> {
    pending_seed: Option<Seed<E>>,
    records: Vec<E>,
}

impl<E: Entity> CollectionState<E> {
    fn records(&mut self) -> StoreResult<&mut Vec<E>> {
        if let Some(seed) = self.pending_seed.as_ref() {
            self.records = seed.load()?;
            self.pending_seed = None;
            debug!(kind = %E::KIND, count = self.records.len(), "collection seeded");
        }
        Ok(&mut self.records)
    }
}

impl<E, C> InMemoryCollection<E, C>
where
    E: Entity,
    C: Clock + Send + Sync,
{
    /// Creates a collection that materializes `seed` on first access.
    #[must_use]
    pub fn with_seed(seed: Seed<E>, clock: Arc<C>, latency: LatencyProfile) -> Self {
        Self {
            state: Arc::new(RwLock::new(CollectionState {
                pending_seed: Some(seed),
                records: Vec::new(),
            })),
            clock,
            latency,
        }
    }

    /// Creates an empty collection.
    #[must_use]
    pub fn empty(clock: Arc<C>, latency: LatencyProfile) -> Self {
        Self::with_seed(Seed::Empty, clock, latency)
    }

    fn with_records<T>(&self, op: impl FnOnce(&mut Vec<E>) -> StoreResult<T>) -> StoreResult<T> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))?;
        op(state.records()?)
    }
}

impl<E, C> InMemoryCollection<E, C>
where
    E: Fixture,
    C: Clock + Send + Sync,
{
    /// Creates a collection seeded from the embedded fixture for `E`.
    #[must_use]
    pub fn from_fixture(clock: Arc<C>, latency: LatencyProfile) -> Self {
        Self::with_seed(Seed::fixture(), clock, latency)
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn position_of<E: Entity>(records: &[E], id: &E::Id) -> StoreResult<usize> {
    records
        .iter()
        .position(|record| record.id() == id)
        .ok_or_else(|| StoreError::not_found::<E>(id))
}

#[async_trait]
impl<E, C> EntityRepository<E> for InMemoryCollection<E, C>
where
    E: Entity,
    C: Clock + Send + Sync,
{
    async fn get_all(&self) -> StoreResult<Vec<E>> {
        simulate_latency(self.latency.get_all).await;
        self.with_records(|records| Ok(records.clone()))
    }

    async fn get_by_id(&self, id: &E::Id) -> StoreResult<Option<E>> {
        simulate_latency(self.latency.get_by_id).await;
        self.with_records(|records| Ok(records.iter().find(|record| record.id() == id).cloned()))
    }

    async fn find_where(
        &self,
        predicate: &(dyn for<'r> Fn(&'r E) -> bool + Send + Sync),
    ) -> StoreResult<Vec<E>> {
        simulate_latency(self.latency.query).await;
        self.with_records(|records| {
            Ok(records
                .iter()
                .filter(|record| predicate(record))
                .cloned()
                .collect())
        })
    }

    async fn create(&self, draft: E::Draft) -> StoreResult<E> {
        simulate_latency(self.latency.create).await;
        let created = E::from_draft(E::Id::generate(), self.clock.utc(), draft);
        self.with_records(|records| {
            records.push(created.clone());
            Ok(())
        })?;
        debug!(kind = %E::KIND, id = %created.id(), "entity created");
        Ok(created)
    }

    async fn update(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E> {
        simulate_latency(self.latency.update).await;
        let updated = self.with_records(|records| {
            let index = position_of(records, id)?;
            let record = records
                .get_mut(index)
                .ok_or_else(|| StoreError::not_found::<E>(id))?;
            record.apply_patch(patch);
            Ok(record.clone())
        })?;
        debug!(kind = %E::KIND, %id, "entity updated");
        Ok(updated)
    }

    async fn delete(&self, id: &E::Id) -> StoreResult<E> {
        simulate_latency(self.latency.delete).await;
        let removed = self.with_records(|records| {
            let index = position_of(records, id)?;
            Ok(records.remove(index))
        })?;
        debug!(kind = %E::KIND, %id, "entity deleted");
        Ok(removed)
    }
}
