//! Port contracts for job tracking.

mod simulator;

pub use simulator::{
    LIVE_POSITION_JITTER, MAX_ARRIVAL_MINUTES, MIN_ARRIVAL_MINUTES, TrackingSimulator,
};
