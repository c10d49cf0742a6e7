use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::wellness::{
    EmotionTag, EntryAnalysis, JournalAnalysis, SafetyAssessment, FACETS,
};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("valid regex"));

struct EmotionLexicon {
    label: &'static str,
    confidence: f64,
    keywords: &'static [&'static str],
}

const EMOTIONS: [EmotionLexicon; 4] = [
    EmotionLexicon {
        label: "Joy",
        confidence: 0.7,
        keywords: &[
            "happy", "joy", "joyful", "glad", "great", "good", "excited", "grateful", "wonderful",
            "love", "cheerful", "delighted", "proud",
        ],
    },
    EmotionLexicon {
        label: "Sadness",
        confidence: 0.7,
        keywords: &[
            "sad", "down", "upset", "unhappy", "depressed", "lonely", "cry", "crying", "miserable",
            "hopeless", "grief", "heartbroken",
        ],
    },
    EmotionLexicon {
        label: "Anger",
        confidence: 0.6,
        keywords: &[
            "angry", "mad", "frustrated", "furious", "annoyed", "irritated", "rage", "resentful",
            "hate",
        ],
    },
    EmotionLexicon {
        label: "Anxiety",
        confidence: 0.65,
        keywords: &[
            "anxious", "worried", "worry", "nervous", "stressed", "scared", "afraid", "panic",
            "overwhelmed", "tense", "fear", "uneasy",
        ],
    },
];

const REFLECTION_LABEL: &str = "Reflection";
const REFLECTION_CONFIDENCE: f64 = 0.5;

const POSITIVE_STEMS: &[&str] = &[
    "good", "great", "happy", "calm", "love", "grateful", "better", "joy", "hope", "proud",
    "relax", "excit", "glad", "peace",
];

const NEGATIVE_STEMS: &[&str] = &[
    "bad", "sad", "angry", "anxi", "stress", "worr", "tired", "hate", "lonely", "afraid", "upset",
    "awful", "terrible", "fear",
];

const OFFLINE_INSIGHT: &str = "Take a moment to notice what stood out for you today.";

/// Keyword emotion tags, one per matched lexicon
///
/// Text matching no lexicon yields exactly one low-confidence reflection tag.
pub fn emotion_tags(text: &str) -> Vec<EmotionTag> {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut tags: Vec<EmotionTag> = EMOTIONS
        .iter()
        .filter(|lexicon| lexicon.keywords.iter().any(|k| words.contains(k)))
        .map(|lexicon| EmotionTag::new(lexicon.label, lexicon.confidence))
        .collect();

    if tags.is_empty() {
        tags.push(EmotionTag::new(REFLECTION_LABEL, REFLECTION_CONFIDENCE));
    }

    tags
}

/// Lexicon sentiment in [-1, 1]
///
/// Each whitespace token scores +1 if it contains a positive stem and -1 if
/// it contains a negative one; the sum is scaled by max(tokens / 10, 1).
pub fn sentiment_score(text: &str) -> f64 {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

    if tokens.is_empty() {
        return 0.0;
    }

    let raw: i64 = tokens
        .iter()
        .map(|token| {
            let positive = POSITIVE_STEMS.iter().any(|s| token.contains(s)) as i64;
            let negative = NEGATIVE_STEMS.iter().any(|s| token.contains(s)) as i64;
            positive - negative
        })
        .sum();

    let scale = (tokens.len() as f64 / 10.0).max(1.0);
    (raw as f64 / scale).clamp(-1.0, 1.0)
}

/// Full analysis envelope shaped like the backend's response
pub fn journal_analysis(text: &str) -> JournalAnalysis {
    let facet_signals: BTreeMap<String, serde_json::Value> = FACETS
        .iter()
        .map(|facet| (facet.to_string(), serde_json::Value::from("0")))
        .collect();

    JournalAnalysis {
        safety: Some(SafetyAssessment::safe()),
        analysis: EntryAnalysis {
            emotions: emotion_tags(text),
            sentiment: sentiment_score(text),
            cognitive_distortions: Vec::new(),
            topics: Vec::new(),
            facet_signals,
            one_line_insight: OFFLINE_INSIGHT.to_string(),
        },
        recommendation: None,
    }
}
