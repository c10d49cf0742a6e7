//! Retrying invoker - ordered-target failover with backoff on overload

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{GenerativeClient, InvokerError, ProviderErrorBody, ProviderReply, ProviderTarget};
use crate::domain::transport::TransportError;

/// Retry schedule applied to each provider target
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempts per target before failing over
    pub max_retries: u32,
    /// Overload backoff is `overload_base_delay * 2^attempt`
    pub overload_base_delay: Duration,
    /// Network backoff is `network_delay_step * attempt`
    pub network_delay_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            overload_base_delay: Duration::from_secs(1),
            network_delay_step: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Delay after an overloaded attempt (1-indexed)
    pub fn overload_delay(&self, attempt: u32) -> Duration {
        self.overload_base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Delay after a network failure (1-indexed)
    pub fn network_delay(&self, attempt: u32) -> Duration {
        self.network_delay_step.saturating_mul(attempt)
    }

    fn attempts_per_target(&self) -> u32 {
        self.max_retries.max(1)
    }
}

/// Text produced by a successful invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub target: ProviderTarget,
    /// Total calls made across all targets, including the successful one
    pub attempts: u32,
}

/// Per-invocation bookkeeping; never shared between calls
#[derive(Debug)]
struct RetryState {
    target_index: usize,
    attempt: u32,
    attempts: u32,
    last_error: Option<InvokerError>,
}

impl RetryState {
    fn new() -> Self {
        Self {
            target_index: 0,
            attempt: 1,
            attempts: 0,
            last_error: None,
        }
    }

    /// Records a retryable failure; returns the delay if the same target is retried
    fn retry_or_advance(
        &mut self,
        error: InvokerError,
        delay: Duration,
        max_attempts: u32,
    ) -> Option<Duration> {
        self.last_error = Some(error);

        if self.attempt < max_attempts {
            self.attempt += 1;
            Some(delay)
        } else {
            self.target_index += 1;
            self.attempt = 1;
            None
        }
    }
}

enum AttemptOutcome {
    Done(String),
    Overloaded(InvokerError),
    Transient(InvokerError),
    Fatal(InvokerError),
}

/// Calls a generative-text provider across an ordered list of targets
///
/// Targets and attempts are strictly sequential. Overload and network
/// failures are retried with backoff, then failed over; any other
/// application error ends the invocation immediately.
pub struct RetryingInvoker<C: GenerativeClient> {
    client: C,
    targets: Vec<ProviderTarget>,
    policy: RetryPolicy,
}

impl<C: GenerativeClient> std::fmt::Debug for RetryingInvoker<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryingInvoker")
            .field("targets", &self.targets)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<C: GenerativeClient> RetryingInvoker<C> {
    pub fn new(client: C, targets: Vec<ProviderTarget>, policy: RetryPolicy) -> Self {
        Self {
            client,
            targets,
            policy,
        }
    }

    /// Generate text for `prompt`, failing over across targets
    pub async fn invoke(&self, prompt: &str) -> Result<Generation, InvokerError> {
        if self.targets.is_empty() {
            return Err(InvokerError::NoTargets);
        }

        let max_attempts = self.policy.attempts_per_target();
        let mut state = RetryState::new();

        while let Some(target) = self.targets.get(state.target_index) {
            state.attempts += 1;
            debug!(
                model = %target.model,
                attempt = state.attempt,
                "Calling provider target"
            );

            let result = self.client.generate(target, prompt).await;

            let (error, delay) = match classify(target, result) {
                AttemptOutcome::Done(text) => {
                    info!(
                        model = %target.model,
                        attempts = state.attempts,
                        "Provider call succeeded"
                    );

                    return Ok(Generation {
                        text,
                        target: target.clone(),
                        attempts: state.attempts,
                    });
                }
                AttemptOutcome::Fatal(error) => {
                    warn!(model = %target.model, error = %error, "Provider rejected request");
                    return Err(error);
                }
                AttemptOutcome::Overloaded(error) => {
                    let delay = self.policy.overload_delay(state.attempt);
                    (error, delay)
                }
                AttemptOutcome::Transient(error) => {
                    let delay = self.policy.network_delay(state.attempt);
                    (error, delay)
                }
            };

            warn!(
                model = %target.model,
                attempt = state.attempt,
                error = %error,
                "Provider call failed"
            );

            match state.retry_or_advance(error, delay, max_attempts) {
                Some(delay) => {
                    debug!(
                        model = %target.model,
                        delay_secs = delay.as_secs_f64(),
                        "Backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                }
                None => {
                    warn!(model = %target.model, "Retries exhausted, failing over");
                }
            }
        }

        Err(InvokerError::ExhaustedRetries {
            attempts: state.attempts,
            last_error: Box::new(state.last_error.unwrap_or(InvokerError::NoTargets)),
        })
    }
}

fn classify(
    target: &ProviderTarget,
    result: Result<ProviderReply, TransportError>,
) -> AttemptOutcome {
    let model = target.model.clone();

    match result {
        Ok(ProviderReply {
            error: Some(error), ..
        }) => {
            if error.is_overload() {
                AttemptOutcome::Overloaded(InvokerError::Overloaded {
                    model,
                    message: error.message,
                })
            } else {
                AttemptOutcome::Fatal(InvokerError::Application {
                    model,
                    status: error.code,
                    message: error.message,
                })
            }
        }
        Ok(ProviderReply {
            text: Some(text), ..
        }) => AttemptOutcome::Done(text),
        Ok(ProviderReply { text: None, .. }) => AttemptOutcome::Fatal(InvokerError::Application {
            model,
            status: None,
            message: "Provider response contained no text".to_string(),
        }),
        Err(TransportError::Network { message }) => {
            AttemptOutcome::Transient(InvokerError::Network { model, message })
        }
        Err(TransportError::Application {
            status,
            message,
            body,
        }) => {
            let body_error = body.as_ref().and_then(ProviderErrorBody::from_body);
            let overloaded =
                status == Some(503) || body_error.as_ref().is_some_and(|e| e.is_overload());
            let message = body_error
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(message);

            if overloaded {
                AttemptOutcome::Overloaded(InvokerError::Overloaded { model, message })
            } else {
                AttemptOutcome::Fatal(InvokerError::Application {
                    model,
                    status,
                    message,
                })
            }
        }
    }
}
