//! Task listings for customers and professionals.

use std::sync::Arc;

use crate::marketplace::{
    domain::{Task, TaskStatus, UserId},
    ports::{EntityRepository, StoreResult},
};

/// Read-only task queries.
#[derive(Clone)]
pub struct TaskListings<R>
where
    R: EntityRepository<Task>,
{
    tasks: Arc<R>,
}

impl<R> TaskListings<R>
where
    R: EntityRepository<Task>,
{
    /// Creates listings over `tasks`.
    #[must_use]
    pub const fn new(tasks: Arc<R>) -> Self {
        Self { tasks }
    }

    /// Returns the tasks posted by `customer_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the collection cannot be read.
    pub async fn for_customer(&self, customer_id: &UserId) -> StoreResult<Vec<Task>> {
        let wanted = customer_id.clone();
        self.tasks
            .find_where(&move |task: &Task| *task.customer_id() == wanted)
            .await
    }

    /// Returns the tasks still waiting for a professional.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the collection cannot be read.
    pub async fn open_tasks(&self) -> StoreResult<Vec<Task>> {
        self.tasks
            .find_where(&|task: &Task| task.status() == TaskStatus::Posted)
            .await
    }
}
