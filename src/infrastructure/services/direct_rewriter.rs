use tracing::info;

use crate::domain::provider::{GenerativeClient, InvokerError, RetryingInvoker};
use crate::domain::wellness::RewriteResult;

/// Longest rewrite returned to callers, in characters
pub const MAX_REWRITE_CHARS: usize = 500;

/// Phrases reported as removed when they appear in the original text
const HEAT_PHRASES: &[&str] = &[
    "always",
    "never",
    "you should",
    "you need to",
    "obviously",
    "clearly",
];

/// Rewrites a message by calling the provider directly
///
/// Unlike the backend capability, failures are returned to the caller;
/// `InvokerError::user_message` gives the text to show.
#[derive(Debug)]
pub struct DirectRewriter<C: GenerativeClient> {
    invoker: RetryingInvoker<C>,
}

impl<C: GenerativeClient> DirectRewriter<C> {
    pub fn new(invoker: RetryingInvoker<C>) -> Self {
        Self { invoker }
    }

    pub async fn rewrite(&self, text: &str, intent: &str) -> Result<RewriteResult, InvokerError> {
        let generation = self.invoker.invoke(&build_prompt(text, intent)).await?;

        info!(
            provider = %generation.target,
            attempts = generation.attempts,
            "Direct rewrite generated"
        );

        Ok(RewriteResult {
            rewrite: generation
                .text
                .trim()
                .chars()
                .take(MAX_REWRITE_CHARS)
                .collect(),
            removed_terms: heat_phrases(text),
        })
    }
}

fn build_prompt(text: &str, intent: &str) -> String {
    format!(
        "Rewrite this message to be assertive, kind, and specific. Remove blame language, \
         add curiosity, and make it constructive. Keep user intent. At most 120 words.\n\
         Return only the rewrite.\n\n\
         Original message: {}\n\
         Intent: {}",
        text, intent
    )
}

fn heat_phrases(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    HEAT_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}
