//! Deterministic local substitutes served when the backend cannot answer
//!
//! Everything here is a pure function of input already held by the client:
//! no network, no storage, no clock.

mod catalog;
mod checkin;
mod journal;

pub use catalog::{
    baseline_questions, baseline_scores, chat_reply, checkin_questions, default_exercise,
    identity_rewrite, safe_assessment,
};
pub use checkin::{checkin_result, mood_index};
pub use journal::{emotion_tags, journal_analysis, sentiment_score};
