//! Label taxonomy for tagged thoughts and the parsed record type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThoughtLabelerError;

/// Cognitive function assigned to a single thought.
///
/// The wire form is the SCREAMING_SNAKE_CASE name, matching the `[LABEL]`
/// tags the model emits in transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    WorkingMemory,
    SemanticRetrieval,
    LogicalReasoning,
    PatternRecognition,
    AnalogicalReasoning,
    ErrorMonitoring,
    Planning,
    Evaluation,
    CreativeSynthesis,
    AttentionControl,
    Other,
}

impl Label {
    pub const ALL: [Label; 11] = [
        Label::WorkingMemory,
        Label::SemanticRetrieval,
        Label::LogicalReasoning,
        Label::PatternRecognition,
        Label::AnalogicalReasoning,
        Label::ErrorMonitoring,
        Label::Planning,
        Label::Evaluation,
        Label::CreativeSynthesis,
        Label::AttentionControl,
        Label::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::WorkingMemory => "WORKING_MEMORY",
            Label::SemanticRetrieval => "SEMANTIC_RETRIEVAL",
            Label::LogicalReasoning => "LOGICAL_REASONING",
            Label::PatternRecognition => "PATTERN_RECOGNITION",
            Label::AnalogicalReasoning => "ANALOGICAL_REASONING",
            Label::ErrorMonitoring => "ERROR_MONITORING",
            Label::Planning => "PLANNING",
            Label::Evaluation => "EVALUATION",
            Label::CreativeSynthesis => "CREATIVE_SYNTHESIS",
            Label::AttentionControl => "ATTENTION_CONTROL",
            Label::Other => "OTHER",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ThoughtLabelerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .iter()
            .find(|label| label.as_str() == s)
            .copied()
            .ok_or_else(|| ThoughtLabelerError::Parse {
                message: format!("unknown label: {}", s),
            })
    }
}

/// One parsed thought: the collapsed thought text and its label.
/// A parsed transcript is an ordered sequence of these, in transcript order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtRecord {
    pub text: String,
    pub label: Label,
}

/// Collapse all whitespace runs (including newlines) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
