//! Pipeline derivation tests.

use crate::marketplace::domain::{GeoPoint, JobStage, TaskStatus};
use crate::tracking::domain::{PipelineProgress, TrackingView};
use chrono::Utc;
use rstest::rstest;

#[rstest]
#[case("accepted", Some(0))]
#[case("enRoute", Some(1))]
#[case("onSite", Some(2))]
#[case("working", Some(3))]
#[case("completed", Some(4))]
#[case("unknownValue", None)]
#[case("onsite", None)]
#[case("", None)]
fn raw_status_maps_to_pipeline_index(#[case] status: &str, #[case] index: Option<usize>) {
    assert_eq!(PipelineProgress::of(status).current_step_index(), index);
}

#[test]
fn on_site_completes_the_first_three_steps() {
    let steps = PipelineProgress::of(&JobStage::OnSite).steps();

    let completed: Vec<bool> = steps.iter().map(|step| step.completed).collect();
    let current: Vec<bool> = steps.iter().map(|step| step.current).collect();
    assert_eq!(completed, [true, true, true, false, false]);
    assert_eq!(current, [false, false, true, false, false]);
}

#[test]
fn unknown_status_shows_nothing_completed() {
    let progress = PipelineProgress::of("unknownValue");

    assert_eq!(progress.current_stage(), None);
    assert!(
        progress
            .steps()
            .iter()
            .all(|step| !step.completed && !step.current)
    );
}

#[rstest]
#[case(TaskStatus::Posted, None)]
#[case(TaskStatus::Matched, None)]
#[case(TaskStatus::InProgress, None)]
#[case(TaskStatus::Completed, Some(JobStage::Completed))]
fn only_completed_tasks_enter_the_pipeline(
    #[case] status: TaskStatus,
    #[case] stage: Option<JobStage>,
) {
    assert_eq!(PipelineProgress::of(&status).current_stage(), stage);
}

#[test]
fn steps_are_labelled_in_pipeline_order() {
    let labels: Vec<&str> = PipelineProgress::default()
        .steps()
        .iter()
        .map(|step| step.label())
        .collect();

    assert_eq!(
        labels,
        ["Job Accepted", "En Route", "On Site", "Working", "Completed"]
    );
}

#[rstest]
#[case(JobStage::Accepted, false, false)]
#[case(JobStage::EnRoute, true, true)]
#[case(JobStage::OnSite, false, true)]
#[case(JobStage::Working, false, false)]
#[case(JobStage::Completed, false, false)]
fn view_keeps_simulated_values_only_for_their_stages(
    #[case] stage: JobStage,
    #[case] has_arrival: bool,
    #[case] has_position: bool,
) {
    let view = TrackingView::new(PipelineProgress::of(&stage))
        .with_estimated_arrival(Utc::now())
        .with_live_position(GeoPoint::new(40.7, -74.0));

    assert_eq!(view.estimated_arrival().is_some(), has_arrival);
    assert_eq!(view.live_position().is_some(), has_position);
}
