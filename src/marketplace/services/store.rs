//! Explicitly constructed owner of the four marketplace collections.

use std::sync::Arc;

use mockable::Clock;

use crate::config::MarketplaceConfig;
use crate::marketplace::{
    adapters::{InMemoryCollection, Seed},
    domain::{Job, Quote, Task, User},
};

/// Collection of tasks held by a [`MarketplaceStore`].
pub type TaskCollection<C> = InMemoryCollection<Task, C>;
/// Collection of users held by a [`MarketplaceStore`].
pub type UserCollection<C> = InMemoryCollection<User, C>;
/// Collection of quotes held by a [`MarketplaceStore`].
pub type QuoteCollection<C> = InMemoryCollection<Quote, C>;
/// Collection of jobs held by a [`MarketplaceStore`].
pub type JobCollection<C> = InMemoryCollection<Job, C>;

/// Initial contents for each collection of a [`MarketplaceStore`].
#[derive(Debug, Clone)]
pub struct StoreSeeds {
    /// Task seed.
    pub tasks: Seed<Task>,
    /// User seed.
    pub users: Seed<User>,
    /// Quote seed.
    pub quotes: Seed<Quote>,
    /// Job seed.
    pub jobs: Seed<Job>,
}

impl StoreSeeds {
    /// Seeds every collection from its embedded fixture.
    #[must_use]
    pub const fn fixtures() -> Self {
        Self {
            tasks: Seed::fixture(),
            users: Seed::fixture(),
            quotes: Seed::fixture(),
            jobs: Seed::fixture(),
        }
    }

    /// Starts every collection empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tasks: Seed::Empty,
            users: Seed::Empty,
            quotes: Seed::Empty,
            jobs: Seed::Empty,
        }
    }
}

/// The marketplace's persistence collaborator.
///
/// Build one at application start and hand its collections to the services
/// that need them. Clones share the same underlying records.
#[derive(Debug)]
pub struct MarketplaceStore<C: Clock + Send + Sync> {
    tasks: Arc<TaskCollection<C>>,
    users: Arc<UserCollection<C>>,
    quotes: Arc<QuoteCollection<C>>,
    jobs: Arc<JobCollection<C>>,
}

impl<C: Clock + Send + Sync> Clone for MarketplaceStore<C> {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            quotes: Arc::clone(&self.quotes),
            jobs: Arc::clone(&self.jobs),
        }
    }
}

impl<C: Clock + Send + Sync> MarketplaceStore<C> {
    /// Creates a store whose collections materialize `seeds` lazily.
    #[must_use]
    pub fn new(seeds: StoreSeeds, config: &MarketplaceConfig, clock: Arc<C>) -> Self {
        let latency = config.latency;
        Self {
            tasks: Arc::new(InMemoryCollection::with_seed(
                seeds.tasks,
                Arc::clone(&clock),
                latency,
            )),
            users: Arc::new(InMemoryCollection::with_seed(
                seeds.users,
                Arc::clone(&clock),
                latency,
            )),
            quotes: Arc::new(InMemoryCollection::with_seed(
                seeds.quotes,
                Arc::clone(&clock),
                latency,
            )),
            jobs: Arc::new(InMemoryCollection::with_seed(seeds.jobs, clock, latency)),
        }
    }

    /// Creates a store seeded from the embedded fixtures.
    #[must_use]
    pub fn from_fixtures(config: &MarketplaceConfig, clock: Arc<C>) -> Self {
        Self::new(StoreSeeds::fixtures(), config, clock)
    }

    /// Creates a store with empty collections.
    #[must_use]
    pub fn empty(config: &MarketplaceConfig, clock: Arc<C>) -> Self {
        Self::new(StoreSeeds::empty(), config, clock)
    }

    /// Returns the task collection.
    #[must_use]
    pub fn tasks(&self) -> Arc<TaskCollection<C>> {
        Arc::clone(&self.tasks)
    }

    /// Returns the user collection.
    #[must_use]
    pub fn users(&self) -> Arc<UserCollection<C>> {
        Arc::clone(&self.users)
    }

    /// Returns the quote collection.
    #[must_use]
    pub fn quotes(&self) -> Arc<QuoteCollection<C>> {
        Arc::clone(&self.quotes)
    }

    /// Returns the job collection.
    #[must_use]
    pub fn jobs(&self) -> Arc<JobCollection<C>> {
        Arc::clone(&self.jobs)
    }
}
