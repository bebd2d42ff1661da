/// Wizard state management
///
/// Single source of truth for the document flow. Owned by the controller and
/// handed to renderers by reference.

use super::record::{ExtractedData, UploadedFile};
use super::steps::{Step, StepId};

/// Wizard state
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    /// Ordered step sequence, fixed at creation
    steps: Vec<Step>,

    /// Always a valid index into `steps`
    current_step_index: usize,

    /// Document staged on the upload step
    uploaded_file: Option<UploadedFile>,

    /// Result of the processing step
    extracted_data: Option<ExtractedData>,
}

impl WizardState {
    /// Create a new wizard state (fresh start)
    pub fn new() -> Self {
        Self {
            steps: Step::sequence(),
            current_step_index: 0,
            uploaded_file: None,
            extracted_data: None,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_step(&self) -> StepId {
        self.steps[self.current_step_index].id
    }

    /// Position of `id` in the sequence
    pub fn index_of(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    /// Move to `index`. Out-of-range requests leave the state untouched and
    /// return false.
    pub fn set_current_step_index(&mut self, index: isize) -> bool {
        match usize::try_from(index) {
            Ok(index) if index < self.steps.len() => {
                self.current_step_index = index;
                true
            }
            _ => false,
        }
    }

    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.uploaded_file.as_ref()
    }

    pub fn set_uploaded_file(&mut self, file: UploadedFile) {
        self.uploaded_file = Some(file);
    }

    pub fn extracted_data(&self) -> Option<&ExtractedData> {
        self.extracted_data.as_ref()
    }

    pub fn set_extracted_data(&mut self, data: ExtractedData) {
        self.extracted_data = Some(data);
    }

    /// Reset wizard to beginning
    pub fn reset(&mut self) {
        self.current_step_index = 0;
        self.uploaded_file = None;
        self.extracted_data = None;
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
