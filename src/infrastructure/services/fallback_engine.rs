//! Capability calls that always produce a usable result
//!
//! Each method issues exactly one backend request. Any failure, including a
//! success payload of the wrong shape, is logged and replaced by the local
//! substitute from `domain::fallback`.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::envelope::{Failure, HealthProbe, ResponseEnvelope};
use crate::domain::fallback;
use crate::domain::transport::{
    FailureKind, HttpMethod, RequestDescriptor, Transport, TransportError,
};
use crate::domain::wellness::{
    BaselineAnswer, BaselineQuestion, BaselineScores, ChatReply, CheckinQuestion, CheckinResult,
    CheckinSubmission, Exercise, HealthReport, JournalAnalysis, MoodPoint, MoodSeries,
    RewriteResult, SafetyAssessment,
};

pub const DEFAULT_MOOD_SERIES_DAYS: u32 = 30;

/// Remote capabilities exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Health,
    CheckinQuestions,
    BaselineQuestions,
    SubmitCheckin,
    AnalyzeEntry,
    ScoreBaseline,
    Rewrite,
    MoodSeries,
    SuggestExercise,
    SafetyCheck,
    Chat,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Health => "health",
            Capability::CheckinQuestions => "checkin_questions",
            Capability::BaselineQuestions => "baseline_questions",
            Capability::SubmitCheckin => "submit_checkin",
            Capability::AnalyzeEntry => "analyze_entry",
            Capability::ScoreBaseline => "score_baseline",
            Capability::Rewrite => "rewrite",
            Capability::MoodSeries => "mood_series",
            Capability::SuggestExercise => "suggest_exercise",
            Capability::SafetyCheck => "safety_check",
            Capability::Chat => "chat",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Capability::Health => "/health",
            Capability::CheckinQuestions => "/analytics/checkin/questions",
            Capability::BaselineQuestions => "/ai/get-baseline-questions",
            Capability::SubmitCheckin => "/analytics/checkin",
            Capability::AnalyzeEntry => "/ai/analyze-entry",
            Capability::ScoreBaseline => "/ai/score-baseline",
            Capability::Rewrite => "/collab/rewrite",
            Capability::MoodSeries => "/analytics/mood-series",
            Capability::SuggestExercise => "/ai/get-exercise",
            Capability::SafetyCheck => "/ai/safety-check",
            Capability::Chat => "/chat/mood",
        }
    }

    fn get(&self) -> RequestDescriptor {
        RequestDescriptor::get(self.path())
    }

    fn post(&self, body: serde_json::Value) -> RequestDescriptor {
        RequestDescriptor::post(self.path(), body)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Backend response wrappers

#[derive(Deserialize)]
struct QuestionList<T> {
    questions: Vec<T>,
}

#[derive(Deserialize)]
struct ExerciseWrapper {
    exercise: Exercise,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoodSeriesWire {
    Bare(Vec<MoodPoint>),
    Wrapped {
        #[serde(alias = "series")]
        points: Vec<MoodPoint>,
    },
}

impl From<MoodSeriesWire> for MoodSeries {
    fn from(wire: MoodSeriesWire) -> Self {
        match wire {
            MoodSeriesWire::Bare(points) | MoodSeriesWire::Wrapped { points } => {
                MoodSeries { points }
            }
        }
    }
}

/// Issues capability calls through a `Transport` and degrades on failure
#[derive(Clone)]
pub struct FallbackEngine {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for FallbackEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackEngine").finish_non_exhaustive()
    }
}

impl FallbackEngine {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Probes the backend; reports the failure rather than degrading
    pub async fn health(&self) -> HealthProbe<HealthReport> {
        match self.fetch::<HealthReport>(Capability::Health, Capability::Health.get()).await {
            Ok(report) => HealthProbe::Online { report },
            Err(error) => {
                warn!(capability = %Capability::Health, error = %error.message, "Backend health check failed");
                HealthProbe::Offline { error }
            }
        }
    }

    pub async fn checkin_questions(&self) -> ResponseEnvelope<Vec<CheckinQuestion>> {
        let capability = Capability::CheckinQuestions;
        self.call(
            capability,
            capability.get(),
            |list: QuestionList<CheckinQuestion>| list.questions,
            fallback::checkin_questions,
        )
        .await
    }

    pub async fn baseline_questions(&self) -> ResponseEnvelope<Vec<BaselineQuestion>> {
        let capability = Capability::BaselineQuestions;
        self.call(
            capability,
            capability.get(),
            |list: QuestionList<BaselineQuestion>| list.questions,
            fallback::baseline_questions,
        )
        .await
    }

    pub async fn submit_checkin(
        &self,
        submission: &CheckinSubmission,
    ) -> ResponseEnvelope<CheckinResult> {
        let capability = Capability::SubmitCheckin;
        let request = match serde_json::to_value(submission) {
            Ok(body) => capability.post(body),
            Err(e) => {
                return self.degrade(
                    capability,
                    Failure::new(FailureKind::Application, format!("Invalid check-in: {}", e)),
                    fallback::checkin_result(submission),
                );
            }
        };

        self.call(capability, request, identity, || fallback::checkin_result(submission))
            .await
    }

    pub async fn analyze_entry(&self, journal: &str) -> ResponseEnvelope<JournalAnalysis> {
        let capability = Capability::AnalyzeEntry;
        self.call(
            capability,
            capability.post(json!({ "journal": journal })),
            identity,
            || fallback::journal_analysis(journal),
        )
        .await
    }

    pub async fn score_baseline(&self, answers: &[BaselineAnswer]) -> ResponseEnvelope<BaselineScores> {
        let capability = Capability::ScoreBaseline;
        self.call(
            capability,
            capability.post(json!({ "answers": answers })),
            identity,
            fallback::baseline_scores,
        )
        .await
    }

    pub async fn rewrite(&self, text: &str, intent: &str) -> ResponseEnvelope<RewriteResult> {
        let capability = Capability::Rewrite;
        self.call(
            capability,
            capability.post(json!({ "text": text, "intent": intent })),
            identity,
            || fallback::identity_rewrite(text),
        )
        .await
    }

    pub async fn mood_series(&self, user_id: &str, days: u32) -> ResponseEnvelope<MoodSeries> {
        let capability = Capability::MoodSeries;
        let request = RequestDescriptor::builder(HttpMethod::Get, capability.path())
            .query("user_id", user_id)
            .query("days", days)
            .build();

        self.call(
            capability,
            request,
            |wire: MoodSeriesWire| MoodSeries::from(wire),
            MoodSeries::empty,
        )
        .await
    }

    pub async fn suggest_exercise(&self, target_facets: &[String]) -> ResponseEnvelope<Exercise> {
        let capability = Capability::SuggestExercise;
        self.call(
            capability,
            capability.post(json!({ "target_facets": target_facets })),
            |wrapper: ExerciseWrapper| wrapper.exercise,
            fallback::default_exercise,
        )
        .await
    }

    pub async fn safety_check(&self, text: &str) -> ResponseEnvelope<SafetyAssessment> {
        let capability = Capability::SafetyCheck;
        self.call(
            capability,
            capability.post(json!({ "text": text })),
            identity,
            fallback::safe_assessment,
        )
        .await
    }

    pub async fn chat(&self, message: &str, session_id: &str) -> ResponseEnvelope<ChatReply> {
        let capability = Capability::Chat;
        self.call(
            capability,
            capability.post(json!({ "message": message, "session_id": session_id })),
            identity,
            || fallback::chat_reply(session_id),
        )
        .await
    }

    async fn call<W, T>(
        &self,
        capability: Capability,
        request: RequestDescriptor,
        extract: impl FnOnce(W) -> T,
        substitute: impl FnOnce() -> T,
    ) -> ResponseEnvelope<T>
    where
        W: DeserializeOwned,
    {
        match self.fetch::<W>(capability, request).await {
            Ok(wire) => ResponseEnvelope::Success(extract(wire)),
            Err(failure) => self.degrade(capability, failure, substitute()),
        }
    }

    async fn fetch<W: DeserializeOwned>(
        &self,
        capability: Capability,
        request: RequestDescriptor,
    ) -> Result<W, Failure> {
        let value = self
            .transport
            .send(&request)
            .await
            .map_err(|e: TransportError| Failure::from(&e))?;

        let decoded = serde_json::from_value(value).map_err(|e| {
            Failure::new(
                FailureKind::Application,
                format!("Unexpected {} response: {}", capability, e),
            )
        })?;

        debug!(capability = %capability, "Backend call succeeded");
        Ok(decoded)
    }

    fn degrade<T>(&self, capability: Capability, failure: Failure, payload: T) -> ResponseEnvelope<T> {
        warn!(
            capability = %capability,
            kind = ?failure.kind,
            error = %failure.message,
            "Backend call failed, serving local substitute"
        );
        ResponseEnvelope::degraded(payload, failure)
    }
}

fn identity<T>(value: T) -> T {
    value
}
