//! Application services for task creation.

mod posting;

pub use posting::{PostingError, PostingResult, TaskPostingService};
