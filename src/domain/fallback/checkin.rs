use crate::domain::wellness::{round_dp, CheckinResult, CheckinSubmission, RiskFlag};

/// Average assumed when a submission carries no responses
const NEUTRAL_RESPONSE: f64 = 3.0;

/// Maps the mean of 1-5 responses onto 0-100, rounded to two decimals
///
/// Identifying fields (user id, date) live outside `responses` and never
/// enter the average.
pub fn mood_index(submission: &CheckinSubmission) -> f64 {
    let values: Vec<f64> = submission
        .responses
        .values()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    let avg = if values.is_empty() {
        NEUTRAL_RESPONSE
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    };

    round_dp(((avg - 1.0) / 4.0) * 100.0, 2)
}

/// Offline check-in result; without history the averages equal the index
pub fn checkin_result(submission: &CheckinSubmission) -> CheckinResult {
    let index = mood_index(submission);

    CheckinResult {
        mood_index: index,
        ema7: index,
        ema14: index,
        zscore: 0.0,
        flag: RiskFlag::Safe,
    }
}
