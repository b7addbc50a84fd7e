//! Marketplace entities and their persistence collaborator.
//!
//! Tasks, users, quotes, and jobs each live in their own collection behind
//! the [`ports::EntityRepository`] contract: list, look up, create, update,
//! and delete, always returning copies. The in-memory adapter seeds itself
//! from embedded fixtures and simulates request latency. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query and store services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
