//! Query service tests over the fixture data.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::config::MarketplaceConfig;
use crate::marketplace::{
    domain::{
        Availability, Category, Entity, NewUser, QuoteId, TaskId, User, UserId, UserKind,
    },
    ports::EntityRepository,
    services::{MarketplaceStore, ProDirectory, ProSearch, QuoteBoard, TaskListings, directory_order},
};

#[fixture]
fn store() -> MarketplaceStore<DefaultClock> {
    MarketplaceStore::from_fixtures(&MarketplaceConfig::immediate(), Arc::new(DefaultClock))
}

fn ids(users: &[User]) -> Vec<&str> {
    users.iter().map(|user| user.id().as_str()).collect()
}

fn pro(id: &str, rating: f64, distance: Option<f64>) -> User {
    let draft = distance.into_iter().fold(
        NewUser::new(UserKind::Pro, id).with_rating(rating),
        NewUser::with_distance,
    );
    User::from_draft(UserId::new(id), Utc::now(), draft)
}

#[rstest]
#[case(ProSearch::new(), &["user_4", "user_2", "user_3", "user_6"])]
#[case(ProSearch::new().with_category(Category::Plumbing), &["user_4", "user_6"])]
#[case(ProSearch::new().with_category(Category::General), &["user_2", "user_6"])]
#[case(ProSearch::new().with_min_rating(4.8), &["user_4", "user_2", "user_3"])]
#[case(ProSearch::new().with_max_distance(1.0), &["user_4", "user_6"])]
#[case(
    ProSearch::new().with_availability(Availability::Available),
    &["user_2", "user_6"]
)]
#[case(
    ProSearch::new()
        .with_category(Category::Electrical)
        .with_availability(Availability::Today),
    &[]
)]
#[tokio::test(flavor = "multi_thread")]
async fn directory_filters_and_orders_professionals(
    store: MarketplaceStore<DefaultClock>,
    #[case] search: ProSearch,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    let directory = ProDirectory::new(store.users());

    let found = directory.search(search).await?;

    assert_eq!(ids(&found), expected);
    Ok(())
}

#[test]
fn directory_order_prefers_rating_then_distance() {
    let near = pro("near", 4.7, Some(0.5));
    let far = pro("far", 4.7, Some(3.0));
    let unknown = pro("unknown", 4.7, None);
    let best = pro("best", 5.0, Some(9.0));

    assert_eq!(directory_order(&best, &near), Ordering::Less);
    assert_eq!(directory_order(&near, &far), Ordering::Less);
    assert_eq!(directory_order(&unknown, &near), Ordering::Less);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_pro_ignores_customers(store: MarketplaceStore<DefaultClock>) -> eyre::Result<()> {
    let directory = ProDirectory::new(store.users());

    assert!(directory.find_pro(&UserId::new("user_2")).await?.is_some());
    assert!(directory.find_pro(&UserId::new("user_1")).await?.is_none());
    Ok(())
}

#[rstest]
#[case("task_1", &["quote_1", "quote_2"])]
#[case("task_2", &["quote_3"])]
#[case("task_4", &[])]
#[tokio::test(flavor = "multi_thread")]
async fn quotes_for_task_lists_offers_in_order(
    store: MarketplaceStore<DefaultClock>,
    #[case] task_id: &str,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    let board = QuoteBoard::new(store.quotes());

    let quotes = board.quotes_for_task(&TaskId::new(task_id)).await?;

    let found: Vec<&str> = quotes.iter().map(|quote| quote.id().as_str()).collect();
    assert_eq!(found, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submitted_quote_is_listed_and_can_be_accepted(
    store: MarketplaceStore<DefaultClock>,
) -> eyre::Result<()> {
    let board = QuoteBoard::new(store.quotes());

    let submitted = board
        .submit_quote(TaskId::new("task_1"), UserId::new("user_2"), 175)
        .await?;
    assert!(!submitted.is_accepted());

    let accepted = board.accept_quote(submitted.id()).await?;
    assert!(accepted.is_accepted());

    let listed = board.quotes_for_task(&TaskId::new("task_1")).await?;
    assert_eq!(listed.last(), Some(&accepted));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepting_a_missing_quote_is_not_found(store: MarketplaceStore<DefaultClock>) {
    let board = QuoteBoard::new(store.quotes());

    let result = board.accept_quote(&QuoteId::new("missing")).await;

    assert!(result.is_err_and(|err| err.is_not_found()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_by_customer_and_open_tasks(
    store: MarketplaceStore<DefaultClock>,
) -> eyre::Result<()> {
    let listings = TaskListings::new(store.tasks());

    let mine = listings.for_customer(&UserId::new("user_1")).await?;
    let open = listings.open_tasks().await?;

    let mine_ids: Vec<&str> = mine.iter().map(|task| task.id().as_str()).collect();
    let open_ids: Vec<&str> = open.iter().map(|task| task.id().as_str()).collect();
    assert_eq!(mine_ids, ["task_1", "task_2", "task_4"]);
    assert_eq!(open_ids, ["task_1"]);
    assert!(store.tasks().get_all().await?.len() > mine.len());
    Ok(())
}
