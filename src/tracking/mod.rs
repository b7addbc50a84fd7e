//! Job status tracking.
//!
//! Progress is a pure function of a status value over the fixed pipeline
//! `accepted -> enRoute -> onSite -> working -> completed`. The tracker never
//! advances a job on its own; it reports whatever the stored status holds.
//! Arrival estimates and live positions are simulated through the
//! [`ports::TrackingSimulator`] port.
//!
//! - Pipeline derivation and the tracking view in [`domain`]
//! - The simulator port in [`ports`]
//! - Random and fixed simulators in [`adapters`]
//! - Loading, completion, and live refresh in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
