//! Application services over the marketplace collections.

mod directory;
mod listings;
mod quotes;
mod store;

pub use directory::{ProDirectory, ProSearch, directory_order};
pub use listings::TaskListings;
pub use quotes::QuoteBoard;
pub use store::{
    JobCollection, MarketplaceStore, QuoteCollection, StoreSeeds, TaskCollection, UserCollection,
};
