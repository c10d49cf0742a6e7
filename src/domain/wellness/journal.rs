use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Exercise;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionTag {
    pub label: String,
    pub score: f64,
}

impl EmotionTag {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyLabel {
    #[default]
    Safe,
    Escalate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    pub label: SafetyLabel,
}

impl SafetyAssessment {
    pub fn safe() -> Self {
        Self {
            label: SafetyLabel::Safe,
        }
    }

    pub fn requires_escalation(&self) -> bool {
        self.label == SafetyLabel::Escalate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryAnalysis {
    pub emotions: Vec<EmotionTag>,
    #[serde(default)]
    pub sentiment: f64,
    #[serde(default)]
    pub cognitive_distortions: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub facet_signals: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub one_line_insight: String,
}

/// Full response of the journal analysis endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetyAssessment>,
    pub analysis: EntryAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Exercise>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_backend_payload() {
        let payload = json!({
            "safety": {"label": "SAFE"},
            "analysis": {
                "emotions": [{"label": "Joy", "score": 0.8}],
                "sentiment": 0.4,
                "cognitive_distortions": [],
                "topics": ["reflection"],
                "facet_signals": {"empathy": "0"},
                "one_line_insight": "Continue reflecting"
            },
            "recommendation": {
                "exercise_id": "ai_suggested",
                "title": "Personalized Exercise",
                "steps": ["Take a deep breath"],
                "expected_outcome": "Improved emotional awareness",
                "source_doc_id": "ai_generated",
                "followup_question": "How do you feel after trying this?"
            }
        });

        let analysis: JournalAnalysis = serde_json::from_value(payload).unwrap();

        assert_eq!(analysis.safety, Some(SafetyAssessment::safe()));
        assert_eq!(analysis.analysis.emotions[0].label, "Joy");
        assert_eq!(analysis.analysis.topics, vec!["reflection"]);
        assert_eq!(analysis.recommendation.unwrap().title, "Personalized Exercise");
    }

    #[test]
    fn test_safety_label_serialization() {
        assert_eq!(
            serde_json::to_string(&SafetyLabel::Escalate).unwrap(),
            "\"ESCALATE\""
        );
    }
}
