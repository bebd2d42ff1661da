/// Simulated extraction pipeline
///
/// Three fixed stages complete one per cadence tick; the tick after the last
/// stage closes the run. Timing lives in the flow controller, this type only
/// tracks progress.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::view::{Emphasis, View};

/// Status line before any stage has completed
pub const INITIAL_STATUS: &str = "Scanning Document...";

/// Detail line before any stage has completed
pub const INITIAL_DETAIL: &str = "OCR Engine Initialized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    TextExtraction,
    EntityRecognition,
    ProfileBuilding,
}

impl ProcessingStage {
    pub fn all() -> [ProcessingStage; 3] {
        [
            ProcessingStage::TextExtraction,
            ProcessingStage::EntityRecognition,
            ProcessingStage::ProfileBuilding,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingStage::TextExtraction => "Text Extraction",
            ProcessingStage::EntityRecognition => "Entity Recognition",
            ProcessingStage::ProfileBuilding => "Profile Building",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProcessingStage::TextExtraction => "📄",
            ProcessingStage::EntityRecognition => "🔍",
            ProcessingStage::ProfileBuilding => "👤",
        }
    }

    /// Status line shown once this stage has completed
    pub fn status_text(&self) -> &'static str {
        match self {
            ProcessingStage::TextExtraction => "Extracting Text Layer...",
            ProcessingStage::EntityRecognition => "Identifying Named Entities...",
            ProcessingStage::ProfileBuilding => "Constructing Candidate Profile...",
        }
    }
}

/// What a cadence tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stage `stage` (0-based) completed with `confidence` percent
    StageCompleted { stage: usize, confidence: u8 },

    /// Every stage was already complete; the run is over
    Finished,
}

/// Progress of one pass through the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingRun {
    /// Confidence reported by each completed stage, in stage order
    confidences: Vec<u8>,
    finished: bool,
}

impl ProcessingRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the next stage, or close the run once all stages are done
    pub fn tick<R>(&mut self, rng: &mut R, range: RangeInclusive<u8>) -> TickOutcome
    where
        R: Rng + ?Sized,
    {
        let stage = self.confidences.len();
        if stage >= ProcessingStage::all().len() {
            self.finished = true;
            return TickOutcome::Finished;
        }

        let confidence = rng.gen_range(range);
        self.confidences.push(confidence);
        TickOutcome::StageCompleted { stage, confidence }
    }

    pub fn completed_stages(&self) -> usize {
        self.confidences.len()
    }

    pub fn confidences(&self) -> &[u8] {
        &self.confidences
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Most recently completed stage
    pub fn last_completed(&self) -> Option<ProcessingStage> {
        self.confidences
            .len()
            .checked_sub(1)
            .map(|index| ProcessingStage::all()[index])
    }

    pub fn status_text(&self) -> &'static str {
        self.last_completed()
            .map(|stage| stage.status_text())
            .unwrap_or(INITIAL_STATUS)
    }

    pub fn detail_text(&self) -> String {
        match self.confidences.last() {
            Some(confidence) => format!("AI Confidence: {}%", confidence),
            None => INITIAL_DETAIL.to_string(),
        }
    }

    /// Status lines plus one indicator per stage
    pub fn render<A>(&self) -> View<A> {
        let view = View::new()
            .heading(self.status_text())
            .muted(self.detail_text());

        ProcessingStage::all()
            .iter()
            .enumerate()
            .fold(view, |view, (index, stage)| {
                let emphasis = if index < self.completed_stages() {
                    Emphasis::Done
                } else if index == self.completed_stages() && !self.finished {
                    Emphasis::Active
                } else {
                    Emphasis::Normal
                };
                view.indicator(stage.icon(), stage.label(), emphasis)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_three_stages_then_finished() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut run = ProcessingRun::new();

        for expected in 0..3 {
            match run.tick(&mut rng, 95..=98) {
                TickOutcome::StageCompleted { stage, confidence } => {
                    assert_eq!(stage, expected);
                    assert!((95..=98).contains(&confidence));
                }
                TickOutcome::Finished => panic!("finished early"),
            }
        }
        assert!(!run.is_finished());

        assert_eq!(run.tick(&mut rng, 95..=98), TickOutcome::Finished);
        assert!(run.is_finished());
        assert_eq!(run.completed_stages(), 3);
    }

    #[test]
    fn test_status_lines() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut run = ProcessingRun::new();
        assert_eq!(run.status_text(), "Scanning Document...");
        assert_eq!(run.detail_text(), "OCR Engine Initialized");

        run.tick(&mut rng, 96..=96);
        assert_eq!(run.status_text(), "Extracting Text Layer...");
        assert_eq!(run.detail_text(), "AI Confidence: 96%");

        run.tick(&mut rng, 96..=96);
        run.tick(&mut rng, 96..=96);
        assert_eq!(run.status_text(), "Constructing Candidate Profile...");
    }

    #[test]
    fn test_render_marks_completed_stages() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut run = ProcessingRun::new();
        run.tick(&mut rng, 95..=98);

        let view: View<()> = run.render();
        assert!(view.contains_text("Text Extraction"));
        assert!(view.contains_text("Profile Building"));
        assert!(view.contains_text("Extracting Text Layer..."));
    }
}
