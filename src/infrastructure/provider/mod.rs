//! Generative-text provider clients

mod gemini;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_ENDPOINT};
