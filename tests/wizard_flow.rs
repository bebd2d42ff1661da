// Integration tests for the document processing wizard
// These drive the full flow through the public API on a headless surface

use std::time::Duration;

use hr_assist::messaging::{Event, EventBus};
use hr_assist::view::{MemorySurface, ViewTarget};
use hr_assist::wizard::{StepId, StepStatus, StepperView, WizardAction, WizardFlow, TARGETS};
use hr_assist::DemoConfig;

type Flow = WizardFlow<MemorySurface<WizardAction>>;

fn flow_with_bus() -> (Flow, EventBus) {
    let bus = EventBus::new();
    let flow = WizardFlow::new(MemorySurface::new(&TARGETS), DemoConfig::default(), bus.clone())
        .unwrap()
        .with_seed(2024);
    (flow, bus)
}

fn flow() -> Flow {
    flow_with_bus().0
}

fn statuses(flow: &Flow) -> Vec<StepStatus> {
    StepperView::indicators(flow.state())
        .into_iter()
        .map(|indicator| indicator.status)
        .collect()
}

#[test]
fn test_set_step_negative_on_fresh_state() {
    let mut flow = flow();
    flow.set_step(-1);
    assert_eq!(flow.state().current_step_index(), 0);
}

#[test]
fn test_set_step_past_end() {
    let mut flow = flow();
    flow.set_step(3);
    flow.set_step(5);
    assert_eq!(flow.state().current_step_index(), 3);
}

#[test]
fn test_stepper_after_set_step() {
    let mut flow = flow();
    flow.set_step(1);

    assert_eq!(
        statuses(&flow),
        vec![
            StepStatus::Completed,
            StepStatus::Active,
            StepStatus::Pending,
            StepStatus::Pending,
            StepStatus::Pending,
        ]
    );

    flow.set_step(4);
    assert_eq!(
        statuses(&flow),
        vec![
            StepStatus::Completed,
            StepStatus::Completed,
            StepStatus::Completed,
            StepStatus::Completed,
            StepStatus::Active,
        ]
    );
}

#[test]
fn test_full_cycle_returns_to_start() {
    let mut flow = flow();

    assert!(flow.dispatch(WizardAction::StartSession));
    assert!(flow.dispatch(WizardAction::DropFile));
    flow.advance(Duration::from_millis(6800));
    assert_eq!(flow.current_step(), StepId::Review);

    assert!(flow.dispatch(WizardAction::ApproveData));
    assert_eq!(flow.current_step(), StepId::Complete);
    assert!(flow.surface().view(ViewTarget::APP_ROOT).unwrap().contains_text("Alex Rivera"));

    assert!(flow.dispatch(WizardAction::ProcessNext));
    assert_eq!(flow.state().current_step_index(), 0);
    assert!(flow.state().uploaded_file().is_none());
    assert!(flow.state().extracted_data().is_none());
    assert_eq!(
        flow.surface().text(ViewTarget::PAGE_TITLE),
        Some("New Processing Request")
    );
}

#[test]
fn test_return_to_dashboard_also_resets() {
    let mut flow = flow();
    flow.dispatch(WizardAction::StartSession);
    flow.dispatch(WizardAction::BrowseFiles);
    flow.advance(Duration::from_secs(7));
    flow.dispatch(WizardAction::ApproveData);

    assert!(flow.dispatch(WizardAction::ReturnToDashboard));
    assert_eq!(flow.current_step(), StepId::Start);
    assert!(flow.state().uploaded_file().is_none());
}

#[test]
fn test_review_back_goes_to_upload() {
    let mut flow = flow();
    flow.set_step(3);

    assert!(flow.dispatch(WizardAction::RejectBack));
    assert_eq!(flow.state().current_step_index(), 1);
    assert_eq!(flow.surface().text(ViewTarget::PAGE_TITLE), Some("Upload Document"));
}

#[test]
fn test_processing_emits_three_stages_before_review() {
    let (mut flow, bus) = flow_with_bus();
    let (events, _) = bus.subscribe();

    flow.set_step(2);
    flow.advance(Duration::from_secs(10));
    assert_eq!(flow.current_step(), StepId::Review);

    let events: Vec<Event> = events.try_iter().collect();
    let review_at = events
        .iter()
        .position(|e| matches!(e, Event::StepChanged { to: StepId::Review, .. }))
        .unwrap();

    let stages: Vec<(usize, u8)> = events[..review_at]
        .iter()
        .filter_map(|e| match e {
            Event::StageCompleted { stage, confidence } => Some((*stage, *confidence)),
            _ => None,
        })
        .collect();

    assert_eq!(stages.iter().map(|s| s.0).collect::<Vec<_>>(), vec![0, 1, 2]);
    for (_, confidence) in &stages {
        assert!((95..=98).contains(confidence), "confidence {confidence}");
    }
    assert!(events[..review_at].contains(&Event::PipelineFinished));
    assert_eq!(
        events.iter().filter(|e| matches!(e, Event::StageCompleted { .. })).count(),
        3
    );
}

#[test]
fn test_processing_view_tracks_stages() {
    let mut flow = flow();
    flow.set_step(2);
    let root = |flow: &Flow| flow.surface().view(ViewTarget::APP_ROOT).unwrap().clone();

    assert!(root(&flow).contains_text("Scanning Document..."));

    flow.advance(Duration::from_millis(1500));
    assert!(root(&flow).contains_text("Extracting Text Layer..."));

    flow.advance(Duration::from_millis(1500));
    assert!(root(&flow).contains_text("Identifying Named Entities..."));

    flow.advance(Duration::from_millis(1500));
    assert!(root(&flow).contains_text("Constructing Candidate Profile..."));
}

#[test]
fn test_stale_pipeline_never_advances_reset_wizard() {
    let mut flow = flow();
    flow.dispatch(WizardAction::StartSession);
    flow.dispatch(WizardAction::DropFile);
    flow.advance(Duration::from_millis(3000));

    // Navigate away mid-run, then back into upload
    flow.set_step(0);
    flow.dispatch(WizardAction::StartSession);
    assert_eq!(flow.pending_timers(), 0);

    flow.advance(Duration::from_secs(30));
    assert_eq!(flow.current_step(), StepId::Upload);
}

#[test]
fn test_reentering_processing_restarts_timeline() {
    let mut flow = flow();
    flow.set_step(2);
    flow.advance(Duration::from_millis(6000));

    // Re-render processing right before the old auto-advance would fire
    flow.set_step(2);
    flow.advance(Duration::from_millis(800));
    assert_eq!(flow.current_step(), StepId::Processing);
    assert_eq!(flow.processing().map(|run| run.completed_stages()), Some(0));

    flow.advance(Duration::from_millis(6000));
    assert_eq!(flow.current_step(), StepId::Review);
}

#[test]
fn test_actions_not_offered_are_ignored() {
    let mut flow = flow();
    flow.set_step(2);

    for action in [
        WizardAction::StartSession,
        WizardAction::DropFile,
        WizardAction::ApproveData,
        WizardAction::RejectBack,
        WizardAction::ProcessNext,
    ] {
        assert!(!flow.dispatch(action), "{action:?}");
    }
    assert_eq!(flow.current_step(), StepId::Processing);
}

#[test]
fn test_missing_anchor_fails_construction() {
    let surface = MemorySurface::new(&[ViewTarget::PAGE_TITLE, ViewTarget::APP_ROOT]);
    let result = WizardFlow::new(surface, DemoConfig::default(), EventBus::new());

    let err = result.err().unwrap();
    assert_eq!(err.to_string(), "missing view target: stepper");
}
