/// Event types for both demos
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.

use crate::assistant::DriveMode;
use crate::wizard::StepId;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Wizard moved to another step (or re-entered the same one)
    StepChanged { from: StepId, to: StepId },

    /// A placeholder document was accepted by the drop target
    FileStaged { name: String },

    /// One simulated processing stage finished
    StageCompleted { stage: usize, confidence: u8 },

    /// All processing stages finished and extracted data is available
    PipelineFinished,

    /// Wizard returned to its initial state
    WizardReset,

    /// Drive mode was highlighted on the selection screen
    ModeSelected { mode: DriveMode },

    /// Drive mode was confirmed and persisted
    ModeConfirmed { mode: DriveMode },

    /// Review modal opened for an item
    ReviewOpened { id: u64 },

    /// Item was approved
    ItemApproved { id: u64 },

    /// Item was rejected and queued for reprocessing
    ItemRejected { id: u64 },

    /// Item left the approval list
    ItemRemoved { id: u64 },

    /// Item was added to the top of the approval list
    ItemAdded { id: u64, title: String },

    /// Toast notification appeared
    ToastShown { message: String },

    /// Chat side panel opened or closed
    ChatToggled { open: bool },
}

impl Event {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            Event::StepChanged { from, to } => format!("Step {} -> {}", from, to),
            Event::FileStaged { name } => format!("File staged: {}", name),
            Event::StageCompleted { stage, confidence } => {
                format!("Stage {} complete ({}% confidence)", stage + 1, confidence)
            }
            Event::PipelineFinished => "Processing finished".to_string(),
            Event::WizardReset => "Wizard reset".to_string(),
            Event::ModeSelected { mode } => format!("Mode selected: {}", mode.display_name()),
            Event::ModeConfirmed { mode } => format!("Mode saved: {}", mode.display_name()),
            Event::ReviewOpened { id } => format!("Reviewing item {}", id),
            Event::ItemApproved { id } => format!("Item {} approved", id),
            Event::ItemRejected { id } => format!("Item {} rejected", id),
            Event::ItemRemoved { id } => format!("Item {} removed", id),
            Event::ItemAdded { id, title } => format!("Item {} added: {}", id, title),
            Event::ToastShown { message } => format!("Toast: {}", message),
            Event::ChatToggled { open } => {
                if *open {
                    "Chat opened".to_string()
                } else {
                    "Chat closed".to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_description() {
        let event = Event::StepChanged {
            from: StepId::Start,
            to: StepId::Upload,
        };
        assert_eq!(event.description(), "Step Start -> Upload");

        let event = Event::StageCompleted {
            stage: 0,
            confidence: 97,
        };
        assert_eq!(event.description(), "Stage 1 complete (97% confidence)");

        let event = Event::ModeConfirmed {
            mode: DriveMode::AgentDriven,
        };
        assert_eq!(event.description(), "Mode saved: Agent Driven");
    }
}
