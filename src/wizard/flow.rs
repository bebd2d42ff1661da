/// Wizard flow management
///
/// Owns the wizard state, renders it into a [`Surface`] and drives the
/// processing pipeline off a [`Scheduler`]. Navigation goes through
/// [`WizardFlow::set_step`]; user input goes through [`WizardFlow::dispatch`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use super::processing::{ProcessingRun, TickOutcome};
use super::record::{ExtractedData, UploadedFile};
use super::renderer::{RenderContext, StepRenderer, WizardAction};
use super::state::WizardState;
use super::stepper::StepperView;
use super::steps::StepId;
use crate::config::DemoConfig;
use crate::error::ViewError;
use crate::messaging::{Event, EventBus};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::view::{require_targets, Surface, View, ViewTarget};

/// Regions the wizard renders into
pub const TARGETS: [ViewTarget; 3] = [
    ViewTarget::STEPPER,
    ViewTarget::APP_ROOT,
    ViewTarget::PAGE_TITLE,
];

/// Timer tasks owned by the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardTask {
    /// Processing cadence tick
    Tick,

    /// Leave processing for review
    Advance,
}

/// Wizard flow manager
pub struct WizardFlow<S: Surface<WizardAction>> {
    state: WizardState,
    surface: S,
    config: DemoConfig,
    bus: EventBus,
    scheduler: Scheduler<WizardTask>,
    /// Timers scheduled by the current step render
    step_timers: Vec<TimerHandle>,
    run: Option<ProcessingRun>,
    drag_over: bool,
    /// Actions offered by the main view currently shown
    offered: Vec<WizardAction>,
    rng: StdRng,
}

impl<S: Surface<WizardAction>> WizardFlow<S> {
    /// Create a new wizard flow and render the first step
    pub fn new(surface: S, config: DemoConfig, bus: EventBus) -> Result<Self, ViewError> {
        require_targets(&surface, &TARGETS)?;

        let mut flow = Self {
            state: WizardState::new(),
            surface,
            config,
            bus,
            scheduler: Scheduler::new(),
            step_timers: Vec::new(),
            run: None,
            drag_over: false,
            offered: Vec::new(),
            rng: StdRng::from_entropy(),
        };
        flow.render();

        Ok(flow)
    }

    /// Use a fixed seed for stage confidence values
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> StepId {
        self.state.current_step()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Pipeline progress, while on the processing step
    pub fn processing(&self) -> Option<&ProcessingRun> {
        self.run.as_ref()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// Actions the current main view offers
    pub fn offered_actions(&self) -> &[WizardAction] {
        &self.offered
    }

    /// Navigate to `index`. Out-of-range indices are ignored.
    pub fn set_step(&mut self, index: isize) {
        let from = self.state.current_step();
        if !self.state.set_current_step_index(index) {
            tracing::debug!("Ignoring out-of-range step index {}", index);
            return;
        }

        let to = self.state.current_step();
        tracing::debug!("Step {} -> {}", from, to);
        self.bus.publish(Event::StepChanged { from, to });
        self.render();
    }

    /// Handle a user action. Returns false if the current view does not offer it.
    pub fn dispatch(&mut self, action: WizardAction) -> bool {
        if !self.offered.contains(&action) {
            tracing::debug!("Ignoring {:?} on step {}", action, self.current_step());
            return false;
        }

        match action {
            WizardAction::StartSession => self.go_to(StepId::Upload),
            WizardAction::DragOver | WizardAction::DragLeave => {
                self.drag_over = action == WizardAction::DragOver;
                self.render_main();
            }
            WizardAction::DropFile | WizardAction::BrowseFiles => {
                let file = UploadedFile::placeholder();
                tracing::info!("Staged document {}", file.name);
                self.bus.publish(Event::FileStaged {
                    name: file.name.clone(),
                });
                self.state.set_uploaded_file(file);
                self.go_to(StepId::Processing);
            }
            WizardAction::ApproveData => self.go_to(StepId::Complete),
            WizardAction::RejectBack => self.go_to(StepId::Upload),
            WizardAction::ReturnToDashboard | WizardAction::ProcessNext => self.restart(),
        }

        true
    }

    /// Current logical time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Deadline of the next pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Move time forward by `by`, firing every timer that falls due
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        self.advance_to(until);
    }

    /// Move time forward to `until`, firing every timer that falls due
    pub fn advance_to(&mut self, until: Duration) {
        while let Some((handle, task)) = self.scheduler.pop_due(until) {
            self.step_timers.retain(|h| *h != handle);
            self.fire(task);
        }
        self.scheduler.settle(until);
    }

    fn go_to(&mut self, step: StepId) {
        if let Some(index) = self.state.index_of(step) {
            self.set_step(index as isize);
        }
    }

    fn restart(&mut self) {
        let from = self.state.current_step();
        self.state.reset();
        tracing::info!("Wizard reset");
        self.bus.publish(Event::WizardReset);
        self.bus.publish(Event::StepChanged {
            from,
            to: self.state.current_step(),
        });
        self.render();
    }

    fn fire(&mut self, task: WizardTask) {
        match task {
            WizardTask::Tick => self.tick(),
            WizardTask::Advance => self.go_to(StepId::Review),
        }
    }

    fn tick(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        match run.tick(&mut self.rng, self.config.confidence_range()) {
            TickOutcome::StageCompleted { stage, confidence } => {
                tracing::debug!("Stage {} complete at {}%", stage + 1, confidence);
                self.bus.publish(Event::StageCompleted { stage, confidence });
                self.schedule(self.config.stage_interval(), WizardTask::Tick);
            }
            TickOutcome::Finished => {
                self.state.set_extracted_data(ExtractedData::mock());
                self.bus.publish(Event::PipelineFinished);
                self.schedule(self.config.settle_delay(), WizardTask::Advance);
            }
        }
        self.render_main();
    }

    fn schedule(&mut self, delay: Duration, task: WizardTask) {
        let handle = self.scheduler.schedule(delay, task);
        self.step_timers.push(handle);
    }

    /// Re-render stepper, title and main region for the current step
    fn render(&mut self) {
        let cancelled = self.scheduler.cancel_all(self.step_timers.drain(..));
        if cancelled > 0 {
            tracing::debug!("Cancelled {} timers from the previous step", cancelled);
        }
        self.drag_over = false;
        self.run = None;

        let step = self.state.current_step();
        self.surface
            .show(ViewTarget::STEPPER, StepperView::render(&self.state));
        self.surface
            .show(ViewTarget::PAGE_TITLE, View::line(step.page_title()));

        if step == StepId::Processing {
            self.run = Some(ProcessingRun::new());
            self.schedule(self.config.stage_interval(), WizardTask::Tick);
        }
        self.render_main();
    }

    fn render_main(&mut self) {
        let ctx = RenderContext {
            drag_over: self.drag_over,
            run: self.run.as_ref(),
        };
        let view = StepRenderer::render(&self.state, ctx);
        self.offered = view.actions().into_iter().copied().collect();
        self.surface.show(ViewTarget::APP_ROOT, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemorySurface;

    fn flow() -> WizardFlow<MemorySurface<WizardAction>> {
        WizardFlow::new(
            MemorySurface::new(&TARGETS),
            DemoConfig::default(),
            EventBus::new(),
        )
        .unwrap()
        .with_seed(42)
    }

    #[test]
    fn test_new_flow_renders_start() {
        let flow = flow();
        assert_eq!(flow.current_step(), StepId::Start);
        assert_eq!(
            flow.surface().text(ViewTarget::PAGE_TITLE),
            Some("New Processing Request")
        );
        assert_eq!(flow.offered_actions(), &[WizardAction::StartSession]);
    }

    #[test]
    fn test_missing_target() {
        let surface = MemorySurface::new(&[ViewTarget::STEPPER, ViewTarget::PAGE_TITLE]);
        let err = WizardFlow::new(surface, DemoConfig::default(), EventBus::new())
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "missing view target: app-root");
    }

    #[test]
    fn test_set_step_out_of_range() {
        let mut flow = flow();
        let renders = flow.surface().render_count(ViewTarget::APP_ROOT);

        flow.set_step(-1);
        flow.set_step(5);
        assert_eq!(flow.state().current_step_index(), 0);
        assert_eq!(flow.surface().render_count(ViewTarget::APP_ROOT), renders);
    }

    #[test]
    fn test_unoffered_action_is_ignored() {
        let mut flow = flow();
        assert!(!flow.dispatch(WizardAction::ApproveData));
        assert_eq!(flow.current_step(), StepId::Start);
    }

    #[test]
    fn test_drop_stages_file_and_starts_processing() {
        let mut flow = flow();
        flow.dispatch(WizardAction::StartSession);
        assert!(flow.dispatch(WizardAction::DropFile));

        assert_eq!(flow.current_step(), StepId::Processing);
        assert_eq!(
            flow.state().uploaded_file().map(|f| f.name.as_str()),
            Some("offer_letter_alex_rivera.pdf")
        );
        assert_eq!(flow.pending_timers(), 1);
    }

    #[test]
    fn test_processing_timeline() {
        let mut flow = flow();
        flow.set_step(2);

        flow.advance(Duration::from_millis(4500));
        assert_eq!(flow.processing().map(|r| r.completed_stages()), Some(3));
        assert!(flow.state().extracted_data().is_none());

        flow.advance(Duration::from_millis(1500));
        assert!(flow.state().extracted_data().is_some());
        assert_eq!(flow.current_step(), StepId::Processing);

        flow.advance(Duration::from_millis(799));
        assert_eq!(flow.current_step(), StepId::Processing);

        flow.advance(Duration::from_millis(1));
        assert_eq!(flow.current_step(), StepId::Review);
        assert_eq!(flow.pending_timers(), 0);
    }

    #[test]
    fn test_leaving_processing_cancels_timers() {
        let mut flow = flow();
        flow.set_step(2);
        flow.advance(Duration::from_millis(1500));

        flow.set_step(0);
        assert_eq!(flow.pending_timers(), 0);

        flow.advance(Duration::from_secs(10));
        assert_eq!(flow.current_step(), StepId::Start);
    }

    #[test]
    fn test_drag_over_and_leave() {
        let mut flow = flow();
        flow.set_step(1);

        assert!(flow.dispatch(WizardAction::DragOver));
        assert!(flow.is_drag_over());
        assert!(flow.dispatch(WizardAction::DragLeave));
        assert!(!flow.is_drag_over());
    }
}
