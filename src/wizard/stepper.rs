/// Progress indicator
///
/// Pure function of [`WizardState`]; safe to re-render on every navigation.

use super::state::WizardState;
use crate::view::{Emphasis, View};

/// Glyph shown for finished steps
pub const COMPLETED_GLYPH: &str = "✓";

/// Display status of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// One rendered stepper entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub label: String,
    pub status: StepStatus,
    /// Checkmark for completed steps, 1-based position otherwise
    pub glyph: String,
}

pub struct StepperView;

impl StepperView {
    /// Status of every step given the current position
    pub fn indicators(state: &WizardState) -> Vec<StepIndicator> {
        let current = state.current_step_index();

        state
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let status = if index < current {
                    StepStatus::Completed
                } else if index == current {
                    StepStatus::Active
                } else {
                    StepStatus::Pending
                };
                let glyph = match status {
                    StepStatus::Completed => COMPLETED_GLYPH.to_string(),
                    _ => (index + 1).to_string(),
                };

                StepIndicator {
                    label: step.label.clone(),
                    status,
                    glyph,
                }
            })
            .collect()
    }

    /// Stepper view for the surface
    pub fn render<A>(state: &WizardState) -> View<A> {
        Self::indicators(state)
            .into_iter()
            .fold(View::new(), |view, indicator| {
                let emphasis = match indicator.status {
                    StepStatus::Completed => Emphasis::Done,
                    StepStatus::Active => Emphasis::Active,
                    StepStatus::Pending => Emphasis::Normal,
                };
                view.indicator(indicator.glyph, indicator.label, emphasis)
            })
    }
}
