//! State machine tests for task creation.

use crate::marketplace::domain::{
    Category, Entity, GeoPoint, PhotoRef, Task, TaskId, TaskStatus, Urgency, UserId,
};
use crate::task_creation::domain::{FlowEvent, FlowStep, TaskCreationFlow, ValidationError};
use chrono::Utc;
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn flow() -> TaskCreationFlow {
    TaskCreationFlow::new(GeoPoint::new(40.7128, -74.0060))
}

#[fixture]
fn describing(mut flow: TaskCreationFlow) -> TaskCreationFlow {
    flow.select_category(Category::Electrical)
        .expect("category selection should succeed");
    flow
}

fn photos(names: &[&str]) -> Vec<PhotoRef> {
    names.iter().map(|name| PhotoRef::new(*name)).collect()
}

#[rstest]
fn new_flow_starts_at_category_selection(flow: TaskCreationFlow) {
    assert_eq!(flow.step(), FlowStep::SelectCategory);
    assert_eq!(flow.draft().category(), None);
    assert_eq!(flow.draft().urgency(), Urgency::Flexible);
    assert!(flow.draft().photos().is_empty());
    assert!(flow.quote().is_none());
    assert_eq!(flow.revision(), 0);
}

#[rstest]
fn selecting_a_category_moves_to_description(mut flow: TaskCreationFlow) -> eyre::Result<()> {
    let step = flow.select_category(Category::Plumbing)?;

    ensure!(step == FlowStep::DescribeTask);
    ensure!(flow.draft().category() == Some(Category::Plumbing));
    ensure!(flow.revision() == 1);
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t ")]
fn blank_description_blocks_the_quote(mut describing: TaskCreationFlow, #[case] text: &str) {
    describing
        .set_description(text)
        .expect("description edit should succeed");
    let before = describing.clone();

    let result = describing.request_quote();

    assert_eq!(result, Err(ValidationError::DescriptionRequired));
    assert_eq!(describing, before);
    assert_eq!(describing.step(), FlowStep::DescribeTask);
}

#[rstest]
fn fourth_photo_is_dropped(mut describing: TaskCreationFlow) -> eyre::Result<()> {
    describing.add_photos(photos(&["a.jpg", "b.jpg", "c.jpg"]))?;
    describing.add_photos(photos(&["d.jpg"]))?;

    ensure!(describing.draft().photos() == photos(&["a.jpg", "b.jpg", "c.jpg"]).as_slice());
    Ok(())
}

#[rstest]
fn a_batch_over_the_limit_keeps_the_first_three(
    mut describing: TaskCreationFlow,
) -> eyre::Result<()> {
    describing.add_photos(photos(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]))?;

    ensure!(describing.draft().photos().len() == 3);
    ensure!(describing.draft().photos().first() == Some(&PhotoRef::new("a.jpg")));
    Ok(())
}

#[rstest]
#[case(0, &["b.jpg", "c.jpg"])]
#[case(2, &["a.jpg", "b.jpg"])]
#[case(7, &["a.jpg", "b.jpg", "c.jpg"])]
fn removing_a_photo_by_index(
    mut describing: TaskCreationFlow,
    #[case] index: usize,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    describing.add_photos(photos(&["a.jpg", "b.jpg", "c.jpg"]))?;

    describing.apply(FlowEvent::RemovePhoto(index))?;

    ensure!(describing.draft().photos() == photos(expected).as_slice());
    Ok(())
}

#[rstest]
fn requesting_a_quote_estimates_from_category_and_urgency(
    mut describing: TaskCreationFlow,
) -> eyre::Result<()> {
    describing.set_description("Fix outlet")?;
    describing.set_urgency(Urgency::Today)?;

    let step = describing.request_quote()?;

    ensure!(step == FlowStep::ReviewQuote);
    let quote = describing
        .quote()
        .ok_or_else(|| eyre::eyre!("quote should be present"))?;
    ensure!(quote.price() == 240);
    ensure!(quote.confidence() == 95);
    Ok(())
}

#[rstest]
fn back_walks_the_steps_in_reverse_keeping_the_draft(
    mut describing: TaskCreationFlow,
) -> eyre::Result<()> {
    describing.set_description("Fix outlet")?;
    describing.request_quote()?;

    ensure!(describing.back()? == FlowStep::DescribeTask);
    ensure!(describing.draft().description() == "Fix outlet");
    ensure!(describing.quote().is_some());
    ensure!(describing.back()? == FlowStep::SelectCategory);
    ensure!(describing.draft().category() == Some(Category::Electrical));
    Ok(())
}

#[rstest]
#[case(FlowEvent::Back)]
#[case(FlowEvent::RequestQuote)]
#[case(FlowEvent::SetDescription("Fix outlet".to_owned()))]
fn describing_events_are_refused_before_a_category_is_chosen(
    mut flow: TaskCreationFlow,
    #[case] event: FlowEvent,
) {
    let before = flow.clone();

    let result = flow.apply(event);

    assert!(matches!(
        result,
        Err(ValidationError::NotAllowed {
            step: FlowStep::SelectCategory,
            ..
        })
    ));
    assert_eq!(flow, before);
}

#[rstest]
fn description_cannot_be_edited_while_reviewing(
    mut describing: TaskCreationFlow,
) -> eyre::Result<()> {
    describing.set_description("Fix outlet")?;
    describing.request_quote()?;

    let result = describing.set_description("Something else");

    ensure!(matches!(
        result,
        Err(ValidationError::NotAllowed {
            step: FlowStep::ReviewQuote,
            ..
        })
    ));
    ensure!(describing.draft().description() == "Fix outlet");
    Ok(())
}

#[rstest]
fn submission_carries_draft_and_estimate(mut describing: TaskCreationFlow) -> eyre::Result<()> {
    describing.set_description("Fix outlet")?;
    describing.set_urgency(Urgency::Today)?;
    describing.add_photos(photos(&["outlet.jpg"]))?;
    describing.request_quote()?;

    let submission = describing.prepare_submission(&UserId::new("user_1"))?;
    ensure!(submission.revision() == describing.revision());
    let task = Task::from_draft(TaskId::new("task_x"), Utc::now(), submission.into_task());

    ensure!(task.customer_id() == &UserId::new("user_1"));
    ensure!(task.category() == Category::Electrical);
    ensure!(task.description() == "Fix outlet");
    ensure!(task.urgency() == Urgency::Today);
    ensure!(task.photos() == photos(&["outlet.jpg"]).as_slice());
    ensure!(task.status() == TaskStatus::Posted);
    ensure!(task.estimated_price() == Some(240));
    ensure!(task.ai_classification().map(|ai| ai.confidence) == Some(95));
    Ok(())
}

#[rstest]
fn submission_requires_the_review_step(describing: TaskCreationFlow) {
    let result = describing.prepare_submission(&UserId::new("user_1"));

    assert!(matches!(result, Err(ValidationError::NotAllowed { .. })));
}

#[rstest]
fn stale_submission_is_discarded(mut describing: TaskCreationFlow) -> eyre::Result<()> {
    describing.set_description("Fix outlet")?;
    describing.request_quote()?;
    let submission = describing.prepare_submission(&UserId::new("user_1"))?;
    describing.back()?;

    let result = describing.complete_submission(submission.revision(), "task_x".into());

    ensure!(matches!(
        result,
        Err(ValidationError::StaleSubmission { .. })
    ));
    ensure!(describing.step() == FlowStep::DescribeTask);
    ensure!(describing.posted_task().is_none());
    Ok(())
}

#[rstest]
fn completed_submission_reaches_the_terminal_step(
    mut describing: TaskCreationFlow,
) -> eyre::Result<()> {
    describing.set_description("Fix outlet")?;
    describing.request_quote()?;
    let submission = describing.prepare_submission(&UserId::new("user_1"))?;

    describing.complete_submission(submission.revision(), "task_x".into())?;

    ensure!(describing.step() == FlowStep::Posted);
    ensure!(describing.posted_task().map(|id| id.as_str()) == Some("task_x"));
    ensure!(describing.back().is_err());
    Ok(())
}
