//! Browsing and filtering the professional directory.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::marketplace::{
    domain::{Availability, Category, User, UserId},
    ports::{EntityRepository, StoreResult},
};

/// Filters applied when browsing professionals. Unset filters match all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProSearch {
    category: Option<Category>,
    min_rating: Option<f64>,
    max_distance: Option<f64>,
    availability: Option<Availability>,
}

impl ProSearch {
    /// Creates a search that matches every professional.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps professionals whose skills include `category`.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Keeps professionals rated at least `rating`.
    #[must_use]
    pub const fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Keeps professionals within `miles`. Professionals with no known
    /// distance are kept.
    #[must_use]
    pub const fn with_max_distance(mut self, miles: f64) -> Self {
        self.max_distance = Some(miles);
        self
    }

    /// Keeps professionals with exactly this availability.
    #[must_use]
    pub const fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Returns `true` when `user` is a professional passing every filter.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        user.is_pro()
            && self.category.is_none_or(|category| user.has_skill(category))
            && self.min_rating.is_none_or(|min| user.rating() >= min)
            && self
                .max_distance
                .is_none_or(|max| user.distance().is_none_or(|distance| distance <= max))
            && self
                .availability
                .is_none_or(|wanted| user.availability() == Some(wanted))
    }
}

/// Directory ordering: highest rating first, then nearest first.
///
/// Professionals without a known distance sort as if they were at distance
/// zero.
#[must_use]
pub fn directory_order(a: &User, b: &User) -> Ordering {
    b.rating().total_cmp(&a.rating()).then_with(|| {
        a.distance()
            .unwrap_or_default()
            .total_cmp(&b.distance().unwrap_or_default())
    })
}

/// Read-only view over the professionals in the user collection.
#[derive(Clone)]
pub struct ProDirectory<R>
where
    R: EntityRepository<User>,
{
    users: Arc<R>,
}

impl<R> ProDirectory<R>
where
    R: EntityRepository<User>,
{
    /// Creates a directory over `users`.
    #[must_use]
    pub const fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Returns the professionals matching `search`, in directory order.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the user collection cannot be read.
    pub async fn search(&self, search: ProSearch) -> StoreResult<Vec<User>> {
        let mut pros = self
            .users
            .find_where(&move |user: &User| search.matches(user))
            .await?;
        pros.sort_by(directory_order);
        Ok(pros)
    }

    /// Finds a professional by identifier, ignoring customer accounts.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the lookup fails.
    pub async fn find_pro(&self, id: &UserId) -> StoreResult<Option<User>> {
        Ok(self.users.get_by_id(id).await?.filter(User::is_pro))
    }
}
