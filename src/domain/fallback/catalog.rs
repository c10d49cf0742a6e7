use std::collections::BTreeMap;

use crate::domain::wellness::{
    BaselineQuestion, BaselineScores, ChatReply, CheckinQuestion, Exercise, RewriteResult,
    SafetyAssessment,
};

pub fn checkin_questions() -> Vec<CheckinQuestion> {
    vec![
        CheckinQuestion::new("mood", "How are you feeling today?", "1=Very Low, 5=Very High"),
        CheckinQuestion::new("stress", "How stressed did you feel today?", "1=Not at all, 5=Extremely"),
        CheckinQuestion::new("energy", "What's your energy level right now?", "1=Very Low, 5=Very High"),
        CheckinQuestion::new(
            "connection",
            "How connected did you feel to others today?",
            "1=Not at all, 5=Very Connected",
        ),
        CheckinQuestion::new("motivation", "How motivated did you feel today?", "1=Not at all, 5=Extremely"),
    ]
}

pub fn baseline_questions() -> Vec<BaselineQuestion> {
    vec![
        BaselineQuestion::new("SA1", "self_awareness", "I can recognize my emotions as they arise."),
        BaselineQuestion::new("SR1", "self_regulation", "I can stay calm under pressure."),
        BaselineQuestion::new("M1", "motivation", "I persist even when tasks are difficult."),
        BaselineQuestion::new("E1", "empathy", "I understand others' feelings."),
        BaselineQuestion::new("SS1", "social_skills", "I handle disagreements well."),
    ]
}

/// Plausible mid-range profile; answers are not scored offline
pub fn baseline_scores() -> BaselineScores {
    let scores: BTreeMap<String, f64> = [
        ("self_awareness", 0.6),
        ("self_regulation", 0.5),
        ("motivation", 0.55),
        ("empathy", 0.65),
        ("social_skills", 0.45),
    ]
    .into_iter()
    .map(|(facet, score)| (facet.to_string(), score))
    .collect();

    BaselineScores {
        scores,
        strengths: vec!["empathy".to_string()],
        focus: vec!["self_regulation".to_string(), "social_skills".to_string()],
        summary: "Your strongest area is Empathy. Focus on improving Self Regulation, Social Skills."
            .to_string(),
    }
}

/// The original text, untouched
pub fn identity_rewrite(text: &str) -> RewriteResult {
    RewriteResult {
        rewrite: text.to_string(),
        removed_terms: Vec::new(),
    }
}

pub fn default_exercise() -> Exercise {
    Exercise {
        exercise_id: "breathing".to_string(),
        title: "Mindful Breathing".to_string(),
        steps: [
            "Sit comfortably",
            "Breathe in for 4",
            "Hold for 4",
            "Breathe out for 4",
            "Repeat 5 times",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        expected_outcome: "Increased calm and focus".to_string(),
        followup_question: "How do you feel now?".to_string(),
        source_doc_id: None,
    }
}

pub fn safe_assessment() -> SafetyAssessment {
    SafetyAssessment::safe()
}

pub fn chat_reply(session_id: &str) -> ChatReply {
    ChatReply {
        response: "I'm here to support you. How are you feeling right now?".to_string(),
        session_id: session_id.to_string(),
    }
}
