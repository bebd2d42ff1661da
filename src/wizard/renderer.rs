/// Step views
///
/// Builds the content of the main region for each step. Views carry the
/// actions the user can take from that step; the flow controller refuses
/// anything a view did not offer.

use super::processing::ProcessingRun;
use super::record::{ExtractedData, FALLBACK_FILE_NAME};
use super::state::WizardState;
use super::steps::StepId;
use crate::view::{Emphasis, View};

/// Everything the user can do inside the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardAction {
    StartSession,
    DragOver,
    DragLeave,
    DropFile,
    BrowseFiles,
    ApproveData,
    RejectBack,
    ReturnToDashboard,
    ProcessNext,
}

/// Step-local display state that does not belong in [`WizardState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// Drop target currently hovered
    pub drag_over: bool,

    /// Pipeline progress while on the processing step
    pub run: Option<&'a ProcessingRun>,
}

pub struct StepRenderer;

impl StepRenderer {
    /// Main-region view for the current step
    pub fn render(state: &WizardState, ctx: RenderContext<'_>) -> View<WizardAction> {
        match state.current_step() {
            StepId::Start => Self::start(),
            StepId::Upload => Self::upload(ctx.drag_over),
            StepId::Processing => Self::processing(ctx.run),
            StepId::Review => Self::review(state),
            StepId::Complete => Self::complete(state),
        }
    }

    fn start() -> View<WizardAction> {
        View::new()
            .heading("Process New Employee Document")
            .muted("Extract data automatically from offer letters, contracts, or ID cards.")
            .button('s', "Start New Session", WizardAction::StartSession)
    }

    fn upload(drag_over: bool) -> View<WizardAction> {
        let view = if drag_over {
            View::new()
                .styled("Drag & Drop your file here", Emphasis::Active)
                .button('l', "Move away", WizardAction::DragLeave)
        } else {
            View::new()
                .heading("Drag & Drop your file here")
                .button('o', "Drag a file over", WizardAction::DragOver)
        };

        view.muted("Supported formats: PDF, JPG, PNG (Max 10MB)")
            .button('d', "Drop file", WizardAction::DropFile)
            .button('b', "Browse Files", WizardAction::BrowseFiles)
            .muted("Need help? Ask our AI Assistant in the sidebar.")
    }

    fn processing(run: Option<&ProcessingRun>) -> View<WizardAction> {
        match run {
            Some(run) => run.render(),
            None => ProcessingRun::new().render(),
        }
    }

    fn review(state: &WizardState) -> View<WizardAction> {
        let file_name = state
            .uploaded_file()
            .map(|file| file.name.as_str())
            .unwrap_or(FALLBACK_FILE_NAME);
        let data = state.extracted_data().cloned().unwrap_or_else(ExtractedData::mock);

        let mut view = View::new()
            .muted(format!("Preview: {}", file_name))
            .heading("Extracted Entities")
            .styled("High Confidence", Emphasis::Done);

        for (label, value, confidence, note) in data.form_fields() {
            view = view.field(label, value, confidence.emphasis(), note);
        }

        view.button('r', "Reject / Back", WizardAction::RejectBack)
            .button('a', "Approve Data", WizardAction::ApproveData)
    }

    fn complete(state: &WizardState) -> View<WizardAction> {
        let data = state.extracted_data().cloned().unwrap_or_else(ExtractedData::mock);

        View::new()
            .heading("Profile Created Successfully")
            .muted("The candidate profile has been generated and queued for final HR verification.")
            .styled(format!("[{}]", data.initials()), Emphasis::Active)
            .text(data.full_name.as_str())
            .muted(data.position.as_str())
            .field("Employee ID", data.id_number.as_str(), Emphasis::Normal, None)
            .button('d', "Return to Dashboard", WizardAction::ReturnToDashboard)
            .button('n', "Process Next Document", WizardAction::ProcessNext)
    }
}
