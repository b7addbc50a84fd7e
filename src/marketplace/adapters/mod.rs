//! Adapter implementations for marketplace persistence.

pub mod fixtures;
pub mod memory;

pub use fixtures::{Fixture, Seed};
pub use memory::InMemoryCollection;
