//! Shared helpers for tracking tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::config::MarketplaceConfig;
use crate::marketplace::services::MarketplaceStore;
use crate::tracking::{adapters::FixedTrackingSimulator, services::StoreTrackingService};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub type TestService = StoreTrackingService<FixedTrackingSimulator, FixedClock>;

pub fn fixture_store() -> MarketplaceStore<FixedClock> {
    MarketplaceStore::from_fixtures(
        &MarketplaceConfig::immediate(),
        Arc::new(FixedClock(frozen_now())),
    )
}

pub fn tracking_service(store: &MarketplaceStore<FixedClock>) -> TestService {
    StoreTrackingService::from_store(
        store,
        Arc::new(FixedTrackingSimulator::new(25)),
        Arc::new(FixedClock(frozen_now())),
    )
}
