/// Wizard step definitions
///
/// Defines all steps of the document processing flow, in order.

/// Step identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    /// Intro panel
    Start,

    /// Drop target for the document
    Upload,

    /// Simulated extraction pipeline
    Processing,

    /// Extracted data, approve or go back
    Review,

    /// Summary of the created profile
    Complete,
}

impl StepId {
    /// Short label shown in the stepper
    pub fn label(&self) -> &'static str {
        match self {
            StepId::Start => "Start",
            StepId::Upload => "Upload",
            StepId::Processing => "Processing",
            StepId::Review => "Review",
            StepId::Complete => "Complete",
        }
    }

    /// Page title shown while the step is active
    pub fn page_title(&self) -> &'static str {
        match self {
            StepId::Start => "New Processing Request",
            StepId::Upload => "Upload Document",
            StepId::Processing => "Analyzing Document",
            StepId::Review => "Review Extracted Data",
            StepId::Complete => "Processing Complete",
        }
    }

    /// Get all step ids in order
    pub fn all() -> [StepId; 5] {
        [
            StepId::Start,
            StepId::Upload,
            StepId::Processing,
            StepId::Review,
            StepId::Complete,
        ]
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry of the wizard's step sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub label: String,
}

impl Step {
    pub fn new(id: StepId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
        }
    }

    /// The fixed step sequence of the document flow
    pub fn sequence() -> Vec<Step> {
        StepId::all().into_iter().map(Step::new).collect()
    }
}
