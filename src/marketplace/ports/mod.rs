//! Port contracts for marketplace persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the workflow,
//! tracking, and directory services.

pub mod repository;

pub use repository::{EntityRepository, StoreError, StoreResult};
