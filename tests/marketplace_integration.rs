//! End-to-end tests through the public API: post a task, gather quotes,
//! accept one, and follow the resulting job to completion.

use std::sync::Arc;

use fixmate::{
    config::MarketplaceConfig,
    estimation::estimate_from_labels,
    marketplace::{
        domain::{Category, JobStage, NewJob, TaskPatch, TaskStatus, Urgency, UserId},
        ports::EntityRepository,
        services::{MarketplaceStore, ProDirectory, ProSearch, QuoteBoard, TaskListings},
    },
    task_creation::{domain::FlowStep, services::TaskPostingService},
    tracking::{adapters::RandomTrackingSimulator, services::StoreTrackingService},
};
use chrono::TimeDelta;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> MarketplaceStore<DefaultClock> {
    MarketplaceStore::from_fixtures(&MarketplaceConfig::immediate(), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn posted_task_is_quoted_matched_and_completed(
    store: MarketplaceStore<DefaultClock>,
) -> eyre::Result<()> {
    let config = MarketplaceConfig::immediate();
    let posting = TaskPostingService::new(store.tasks(), &config);
    let board = QuoteBoard::new(store.quotes());
    let directory = ProDirectory::new(store.users());
    let tracking = StoreTrackingService::from_store(
        &store,
        Arc::new(RandomTrackingSimulator::new()),
        Arc::new(DefaultClock),
    );

    let mut flow = posting.start_flow();
    flow.select_category(Category::Plumbing)?;
    flow.set_description("Leaking pipe under the bathroom sink")?;
    flow.set_urgency(Urgency::Immediate)?;
    flow.request_quote()?;
    let task = posting.submit(&mut flow).await?;
    assert_eq!(flow.step(), FlowStep::Posted);
    assert_eq!(task.estimated_price(), Some(225));

    let pros = directory
        .search(ProSearch::new().with_category(Category::Plumbing))
        .await?;
    let chosen = pros
        .first()
        .ok_or_else(|| eyre::eyre!("a plumber should be listed"))?;
    let quote = board
        .submit_quote(task.id().clone(), chosen.id().clone(), 210)
        .await?;
    board.accept_quote(quote.id()).await?;
    store
        .tasks()
        .update(
            task.id(),
            TaskPatch::new()
                .with_status(TaskStatus::Matched)
                .with_pro(chosen.id().clone()),
        )
        .await?;
    let job = store
        .jobs()
        .create(NewJob::new(task.id().clone(), chosen.id().clone()))
        .await?;

    let accepted = tracking.load(task.id()).await?;
    assert_eq!(accepted.view.current_step_index(), Some(0));
    assert_eq!(accepted.pro.as_ref().map(|pro| pro.id()), Some(chosen.id()));

    tracking.advance_job(job.id(), JobStage::EnRoute).await?;
    let en_route = tracking.load(task.id()).await?;
    let arrival = en_route
        .view
        .estimated_arrival()
        .ok_or_else(|| eyre::eyre!("arrival should be estimated while en route"))?;
    let offset = arrival - chrono::Utc::now();
    assert!(offset <= TimeDelta::minutes(40));
    assert!(offset >= TimeDelta::minutes(9));
    assert!(en_route.view.live_position().is_some());

    let done = tracking.confirm_completion(task.id()).await?;
    assert_eq!(done.task.status(), TaskStatus::Completed);
    assert_eq!(done.view.current_stage(), Some(JobStage::Completed));
    assert_eq!(done.view.live_position(), None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn customer_history_includes_newly_posted_tasks(
    store: MarketplaceStore<DefaultClock>,
) -> eyre::Result<()> {
    let config = MarketplaceConfig::immediate().with_current_customer(UserId::new("user_5"));
    let posting = TaskPostingService::new(store.tasks(), &config);
    let listings = TaskListings::new(store.tasks());

    let mut flow = posting.start_flow();
    flow.select_category(Category::Appliance)?;
    flow.set_description("Dishwasher will not drain")?;
    flow.request_quote()?;
    let task = posting.submit(&mut flow).await?;

    let history = listings.for_customer(&UserId::new("user_5")).await?;
    assert_eq!(history.last().map(|posted| posted.id()), Some(task.id()));
    assert_eq!(history.len(), 2);
    Ok(())
}

#[test]
fn label_estimates_fall_back_for_unknown_input() {
    assert_eq!(estimate_from_labels("unknown", "flexible").price(), 90);
    assert_eq!(estimate_from_labels("electrical", "today").price(), 240);
}
