//! # Question Schema

use serde::{Deserialize, Serialize};

use super::id::DocumentId;

/// A stored quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    pub question: QuestionDetails,
}

impl Question {
    /// Wrap details under a freshly allocated identifier
    pub fn new(details: QuestionDetails) -> Self {
        Self {
            id: DocumentId::new(),
            question: details,
        }
    }

    /// Exact match against any of the question's category names
    pub fn has_category(&self, name: &str) -> bool {
        self.question.categories.iter().any(|c| c == name)
    }
}

/// Question body as submitted by clients
///
/// Absent fields fall back to empty values, mirroring how the service has
/// always accepted partial payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionDetails {
    pub description: String,
    pub explanation: String,
    /// Free-form difficulty label
    pub difficulty: String,
    /// Category names, not category identifiers
    pub categories: Vec<String>,
    pub allow_multiple: bool,
    pub options: Vec<AnswerOption>,
}

/// One selectable answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub option_text: String,

    #[serde(default)]
    pub is_correct: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            option_text: text.into(),
            is_correct,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
