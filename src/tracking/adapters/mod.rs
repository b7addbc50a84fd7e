//! Tracking simulator implementations.

mod fixed;
mod random;

pub use fixed::FixedTrackingSimulator;
pub use random::RandomTrackingSimulator;
