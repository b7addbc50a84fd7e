//! Quote aggregate: a professional's price offer against a task.

use super::{Entity, EntityKind, QuoteId, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    id: QuoteId,
    task_id: TaskId,
    pro_id: UserId,
    price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default)]
    accepted: bool,
    created_at: DateTime<Utc>,
}

impl Quote {
    /// Returns the quote identifier.
    #[must_use]
    pub const fn id(&self) -> &QuoteId {
        &self.id
    }

    /// Returns the quoted task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the quoting professional.
    #[must_use]
    pub const fn pro_id(&self) -> &UserId {
        &self.pro_id
    }

    /// Returns the offered price.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    /// Returns the note sent with the offer, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns whether the customer accepted this quote.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Caller-supplied fields for creating a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    task_id: TaskId,
    pro_id: UserId,
    price: u32,
    message: Option<String>,
    accepted: Option<bool>,
}

impl NewQuote {
    /// Creates a payload for an offer on `task_id`.
    #[must_use]
    pub const fn new(task_id: TaskId, pro_id: UserId, price: u32) -> Self {
        Self {
            task_id,
            pro_id,
            price,
            message: None,
            accepted: None,
        }
    }

    /// Attaches a note to the offer.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the default `accepted = false`.
    #[must_use]
    pub const fn with_accepted(mut self, accepted: bool) -> Self {
        self.accepted = Some(accepted);
        self
    }
}

/// Fields shallow-merged into an existing quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePatch {
    price: Option<u32>,
    message: Option<String>,
    accepted: Option<bool>,
}

impl QuotePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the price.
    #[must_use]
    pub const fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Replaces the note.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the accepted flag.
    #[must_use]
    pub const fn with_accepted(mut self, accepted: bool) -> Self {
        self.accepted = Some(accepted);
        self
    }
}

impl Entity for Quote {
    type Id = QuoteId;
    type Draft = NewQuote;
    type Patch = QuotePatch;

    const KIND: EntityKind = EntityKind::Quote;

    fn id(&self) -> &QuoteId {
        &self.id
    }

    fn from_draft(id: QuoteId, created_at: DateTime<Utc>, draft: NewQuote) -> Self {
        Self {
            id,
            task_id: draft.task_id,
            pro_id: draft.pro_id,
            price: draft.price,
            message: draft.message,
            accepted: draft.accepted.unwrap_or(false),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: QuotePatch) {
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(message) = patch.message {
            self.message = Some(message);
        }
        if let Some(accepted) = patch.accepted {
            self.accepted = accepted;
        }
    }
}
