//! Payload types exchanged with the wellness backend

mod baseline;
mod checkin;
mod coaching;
mod health;
mod journal;
mod mood;

pub use baseline::{BaselineAnswer, BaselineQuestion, BaselineScores, FACETS};
pub use checkin::{CheckinQuestion, CheckinResult, CheckinSubmission, RiskFlag};
pub use coaching::{ChatReply, Exercise, RewriteResult, DEFAULT_REWRITE_INTENT};
pub use health::HealthReport;
pub use journal::{EmotionTag, EntryAnalysis, JournalAnalysis, SafetyAssessment, SafetyLabel};
pub use mood::{MoodPoint, MoodSeries, SeriesStats};

/// Rounds half away from zero to `places` decimal places
pub fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
