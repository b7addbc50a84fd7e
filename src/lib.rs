//! Core of a local-services marketplace.
//!
//! Customers post tasks with an automated price estimate, professionals
//! quote on them, and accepted jobs are tracked through a fixed execution
//! pipeline. The crate is organised as bounded contexts:
//!
//! - [`marketplace`]: the entity model and the persistence collaborator
//! - [`estimation`]: the deterministic price estimator
//! - [`task_creation`]: the task creation state machine and posting
//! - [`tracking`]: job progress, simulated arrival, and live refresh
//! - [`config`]: runtime settings shared by the contexts

pub mod config;
pub mod estimation;
pub mod marketplace;
pub mod task_creation;
pub mod tracking;
