use serde::{Deserialize, Serialize};

pub const DEFAULT_REWRITE_INTENT: &str = "assertive_kind";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResult {
    pub rewrite: String,
    #[serde(default)]
    pub removed_terms: Vec<String>,
}

/// A short guided exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_id: String,
    pub title: String,
    pub steps: Vec<String>,
    #[serde(default)]
    pub expected_outcome: String,
    #[serde(default)]
    pub followup_question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_doc_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}
