//! Identifier types for marketplace entities.
//!
//! Identifiers are opaque strings. Fixture records carry short ids such as
//! `task_1`; ids minted by a collection take the form `<kind>_<uuid>`.

use super::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl EntityId for $name {
            fn generate() -> Self {
                Self(format!("{}_{}", $kind.as_str(), Uuid::new_v4().simple()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a customer task.
    TaskId,
    EntityKind::Task
);

entity_id!(
    /// Identifier of a customer or professional account.
    UserId,
    EntityKind::User
);

entity_id!(
    /// Identifier of a professional quote.
    QuoteId,
    EntityKind::Quote
);

entity_id!(
    /// Identifier of a matched job.
    JobId,
    EntityKind::Job
);
