//! Professional quotes submitted against tasks.

use std::sync::Arc;

use tracing::info;

use crate::marketplace::{
    domain::{NewQuote, Quote, QuoteId, QuotePatch, TaskId, UserId},
    ports::{EntityRepository, StoreResult},
};

/// Submits, lists, and accepts professional quotes.
#[derive(Clone)]
pub struct QuoteBoard<R>
where
    R: EntityRepository<Quote>,
{
    quotes: Arc<R>,
}

impl<R> QuoteBoard<R>
where
    R: EntityRepository<Quote>,
{
    /// Creates a quote board over `quotes`.
    #[must_use]
    pub const fn new(quotes: Arc<R>) -> Self {
        Self { quotes }
    }

    /// Returns the quotes offered on `task_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the collection cannot be read.
    pub async fn quotes_for_task(&self, task_id: &TaskId) -> StoreResult<Vec<Quote>> {
        let wanted = task_id.clone();
        self.quotes
            .find_where(&move |quote: &Quote| *quote.task_id() == wanted)
            .await
    }

    /// Records a professional's offer on a task.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the quote cannot be stored.
    pub async fn submit_quote(
        &self,
        task_id: TaskId,
        pro_id: UserId,
        price: u32,
    ) -> StoreResult<Quote> {
        let quote = self
            .quotes
            .create(NewQuote::new(task_id, pro_id, price))
            .await?;
        info!(quote_id = %quote.id(), task_id = %quote.task_id(), price, "quote submitted");
        Ok(quote)
    }

    /// Marks a quote as accepted by the customer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::marketplace::ports::StoreError::NotFound`] when the
    /// quote does not exist.
    pub async fn accept_quote(&self, quote_id: &QuoteId) -> StoreResult<Quote> {
        let quote = self
            .quotes
            .update(quote_id, QuotePatch::new().with_accepted(true))
            .await?;
        info!(quote_id = %quote.id(), "quote accepted");
        Ok(quote)
    }
}
