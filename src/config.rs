//! Runtime configuration for the marketplace core.

use crate::marketplace::domain::{GeoPoint, UserId};
use std::time::Duration;

/// Simulated round-trip delays applied by the in-memory collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before listing a collection.
    pub get_all: Duration,
    /// Delay before a lookup by identifier.
    pub get_by_id: Duration,
    /// Delay before filtered lookups such as quotes for a task.
    pub query: Duration,
    /// Delay before creating an entity.
    pub create: Duration,
    /// Delay before updating an entity.
    pub update: Duration,
    /// Delay before deleting an entity.
    pub delete: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            query: Duration::from_millis(250),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(300),
        }
    }
}

impl LatencyProfile {
    /// Creates a profile with no simulated delay.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            query: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

/// Marketplace-wide settings injected into the store and services.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceConfig {
    /// Simulated persistence latency.
    pub latency: LatencyProfile,
    /// Customer on whose behalf new tasks are posted.
    pub current_customer: UserId,
    /// Location given to new task drafts.
    pub default_location: GeoPoint,
    /// Period between live tracking refreshes.
    pub live_update_interval: Duration,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::default(),
            current_customer: UserId::new("user_1"),
            default_location: GeoPoint::new(40.7128, -74.0060),
            live_update_interval: Duration::from_secs(5),
        }
    }
}

impl MarketplaceConfig {
    /// Creates a configuration without simulated latency.
    ///
    /// Useful for tests and tooling where delays only slow things down.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            latency: LatencyProfile::none(),
            ..Self::default()
        }
    }

    /// Sets the latency profile.
    #[must_use]
    pub const fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the customer on whose behalf tasks are posted.
    #[must_use]
    pub fn with_current_customer(mut self, customer: UserId) -> Self {
        self.current_customer = customer;
        self
    }

    /// Sets the default draft location.
    #[must_use]
    pub const fn with_default_location(mut self, location: GeoPoint) -> Self {
        self.default_location = location;
        self
    }

    /// Sets the live tracking refresh period.
    #[must_use]
    pub const fn with_live_update_interval(mut self, interval: Duration) -> Self {
        self.live_update_interval = interval;
        self
    }
}
