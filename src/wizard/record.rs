/// Mock extraction results
///
/// Fixed values standing in for what a real OCR/NER pass would produce.

use crate::view::Emphasis;

/// File name stored when the drop target is used
pub const PLACEHOLDER_FILE_NAME: &str = "offer_letter_alex_rivera.pdf";

/// Name shown in the preview when no file was staged
pub const FALLBACK_FILE_NAME: &str = "Document.pdf";

/// Descriptor of the staged document. No file content is ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
}

impl UploadedFile {
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_FILE_NAME.to_string(),
        }
    }
}

/// How sure the simulated extractor is about a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConfidence {
    High,
    Unrated,
    Low,
}

impl FieldConfidence {
    pub fn emphasis(&self) -> Emphasis {
        match self {
            FieldConfidence::High => Emphasis::Done,
            FieldConfidence::Unrated => Emphasis::Normal,
            FieldConfidence::Low => Emphasis::Warning,
        }
    }
}

/// Candidate data pulled out of an offer letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedData {
    pub full_name: String,
    pub position: String,
    pub start_date: String,
    pub salary: String,
    pub id_number: String,
    pub department: String,
}

impl ExtractedData {
    /// The fixed record every simulated run produces
    pub fn mock() -> Self {
        Self {
            full_name: "Alex Rivera".to_string(),
            position: "Senior Systems Engineer".to_string(),
            start_date: "2024-03-15".to_string(),
            salary: "$120,000".to_string(),
            id_number: "E-48291".to_string(),
            department: "Engineering".to_string(),
        }
    }

    /// Initials for the avatar on the summary card
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Review form rows: label, value, confidence, note
    pub fn form_fields(&self) -> Vec<(&'static str, &str, FieldConfidence, Option<&'static str>)> {
        vec![
            ("Candidate Name", self.full_name.as_str(), FieldConfidence::High, None),
            ("Position / Title", self.position.as_str(), FieldConfidence::High, None),
            ("Start Date", self.start_date.as_str(), FieldConfidence::Unrated, None),
            ("Salary (Annual)", self.salary.as_str(), FieldConfidence::Unrated, None),
            (
                "Department",
                self.department.as_str(),
                FieldConfidence::Low,
                Some("Low confidence, please verify"),
            ),
        ]
    }
}
