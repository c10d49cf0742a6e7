use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily check-in Likert question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinQuestion {
    pub id: String,
    pub text: String,
    pub scale: String,
}

impl CheckinQuestion {
    pub fn new(id: &str, text: &str, scale: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            scale: scale.to_string(),
        }
    }
}

/// Daily check-in answers on a 1-5 scale
///
/// Serialized flat, e.g. `{"user_id": "u1", "mood": 4, "stress": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckinSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub responses: BTreeMap<String, f64>,
}

impl CheckinSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_response(mut self, question_id: impl Into<String>, value: f64) -> Self {
        self.responses.insert(question_id.into(), value);
        self
    }
}

/// Trend flag derived from the mood index series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskFlag {
    #[default]
    Safe,
    Watch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinResult {
    pub mood_index: f64,
    #[serde(default)]
    pub ema7: f64,
    #[serde(default)]
    pub ema14: f64,
    #[serde(default)]
    pub zscore: f64,
    #[serde(default)]
    pub flag: RiskFlag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_serializes_flat() {
        let submission = CheckinSubmission::new()
            .with_user("u1")
            .with_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .with_response("mood", 4.0)
            .with_response("stress", 2.0);

        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            value,
            json!({"user_id": "u1", "date": "2026-10-19", "mood": 4.0, "stress": 2.0})
        );
    }

    #[test]
    fn test_result_deserializes_backend_payload() {
        let result: CheckinResult = serde_json::from_value(json!({
            "mood_index": 62.5, "ema7": 60.1, "ema14": 58.0, "zscore": 0.4, "flag": "WATCH"
        }))
        .unwrap();

        assert_eq!(result.mood_index, 62.5);
        assert_eq!(result.flag, RiskFlag::Watch);
    }
}
