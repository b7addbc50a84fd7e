//! Task creation for the marketplace.
//!
//! A customer picks a category, describes the job, reviews an automated
//! estimate, and posts the task. The module follows hexagonal architecture:
//!
//! - The creation state machine in [`domain`]
//! - Posting orchestration in [`services`]
//!
//! Persistence goes through [`crate::marketplace::ports::EntityRepository`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
