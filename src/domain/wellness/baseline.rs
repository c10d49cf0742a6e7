use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The five emotional-intelligence facets scored by the baseline
pub const FACETS: [&str; 5] = [
    "self_awareness",
    "self_regulation",
    "motivation",
    "empathy",
    "social_skills",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineQuestion {
    pub qid: String,
    pub facet: String,
    pub text: String,
}

impl BaselineQuestion {
    pub fn new(qid: &str, facet: &str, text: &str) -> Self {
        Self {
            qid: qid.to_string(),
            facet: facet.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineAnswer {
    pub qid: String,
    pub value: f64,
}

impl BaselineAnswer {
    pub fn new(qid: impl Into<String>, value: f64) -> Self {
        Self {
            qid: qid.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineScores {
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub summary: String,
}
