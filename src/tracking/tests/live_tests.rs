//! Live tracking loop tests.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::timeout;

use super::support::{fixture_store, tracking_service};
use crate::marketplace::domain::{JobId, JobStage, TaskId};
use crate::tracking::services::{LiveTracking, TrackedJob};

const PERIOD: Duration = Duration::from_millis(20);
const WAIT: Duration = Duration::from_secs(5);

/// Consumes refreshes published before cancellation until the sender closes.
async fn drain(updates: &mut watch::Receiver<Option<Arc<TrackedJob>>>) {
    while updates.changed().await.is_ok() {}
}

#[tokio::test(flavor = "multi_thread")]
async fn first_refresh_is_published_immediately() -> eyre::Result<()> {
    let store = fixture_store();
    let live = LiveTracking::spawn(tracking_service(&store), TaskId::new("task_2"), PERIOD);
    let mut updates = live.subscribe();

    timeout(WAIT, updates.wait_for(Option::is_some)).await??;

    let latest = live.latest().ok_or_else(|| eyre::eyre!("no refresh published"))?;
    assert_eq!(latest.current_stage(), Some(JobStage::EnRoute));
    live.stop().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn later_refreshes_pick_up_stage_changes() -> eyre::Result<()> {
    let store = fixture_store();
    let service = tracking_service(&store);
    let live = LiveTracking::spawn(service.clone(), TaskId::new("task_2"), PERIOD);
    let mut updates = live.subscribe();
    timeout(WAIT, updates.wait_for(Option::is_some)).await??;

    service
        .advance_job(&JobId::new("job_1"), JobStage::OnSite)
        .await?;

    timeout(
        WAIT,
        updates.wait_for(|tracked| {
            tracked
                .as_ref()
                .is_some_and(|job| job.current_stage() == Some(JobStage::OnSite))
        }),
    )
    .await??;
    live.stop().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn stopping_ends_the_loop() {
    let store = fixture_store();
    let live = LiveTracking::spawn(tracking_service(&store), TaskId::new("task_2"), PERIOD);
    let mut updates = live.subscribe();

    live.stop().await;

    let closed = timeout(WAIT, drain(&mut updates)).await;
    assert!(closed.is_ok(), "sender should be closed once stopped");
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_the_handle_ends_the_loop() {
    let store = fixture_store();
    let live = LiveTracking::spawn(tracking_service(&store), TaskId::new("task_2"), PERIOD);
    let mut updates = live.subscribe();

    drop(live);

    let closed = timeout(WAIT, drain(&mut updates)).await;
    assert!(closed.is_ok(), "loop should exit after the handle is dropped");
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_refreshes_keep_running_without_publishing() {
    let store = fixture_store();
    let live = LiveTracking::spawn(
        tracking_service(&store),
        TaskId::new("task_missing"),
        PERIOD,
    );

    tokio::time::sleep(PERIOD * 3).await;

    assert!(live.is_running());
    assert!(live.latest().is_none());
    live.stop().await;
}
