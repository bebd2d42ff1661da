/// Document processing wizard
///
/// Walks an HR user through uploading an offer letter, watching a simulated
/// extraction run, reviewing the extracted fields and creating a profile.
///
/// ## Architecture
///
/// ```text
/// WizardFlow<S: Surface>
///   ├── WizardState    (steps, current index, uploaded file, extracted data)
///   ├── StepperView    (progress indicator, pure function of state)
///   ├── StepRenderer   (main view per step, offers the step's actions)
///   ├── ProcessingRun  (three-stage pipeline progress)
///   └── Scheduler      (stage cadence and auto-advance timers)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use hr_assist::wizard::{WizardAction, WizardFlow, TARGETS};
///
/// let surface = MemorySurface::new(&TARGETS);
/// let mut flow = WizardFlow::new(surface, DemoConfig::default(), EventBus::new())?;
///
/// flow.dispatch(WizardAction::StartSession);
/// flow.dispatch(WizardAction::DropFile);
/// flow.advance(Duration::from_millis(6800));
/// assert_eq!(flow.current_step(), StepId::Review);
/// ```
///
/// ## Steps
///
/// 1. **Start** - Intro panel
/// 2. **Upload** - Drop target, stores a placeholder file descriptor
/// 3. **Processing** - Three stages at a fixed cadence, then auto-advance
/// 4. **Review** - Extracted fields; approve, or go back to upload
/// 5. **Complete** - Summary card; either button starts over

pub mod flow;
pub mod processing;
pub mod record;
pub mod renderer;
pub mod state;
pub mod stepper;
pub mod steps;

// Re-export commonly used types
pub use flow::{WizardFlow, WizardTask, TARGETS};
pub use processing::{ProcessingRun, ProcessingStage, TickOutcome};
pub use record::{ExtractedData, UploadedFile};
pub use renderer::{StepRenderer, WizardAction};
pub use state::WizardState;
pub use stepper::{StepIndicator, StepStatus, StepperView};
pub use steps::{Step, StepId};
