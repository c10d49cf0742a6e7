use async_trait::async_trait;

use super::{ProviderReply, ProviderTarget};
use crate::domain::transport::TransportError;

/// One generate-content call against one provider target
///
/// A 2xx response is returned as a parsed `ProviderReply` even when the body
/// carries an `error` object; non-2xx and network failures are classified as
/// `TransportError`.
#[async_trait]
pub trait GenerativeClient: Send + Sync + std::fmt::Debug {
    async fn generate(
        &self,
        target: &ProviderTarget,
        prompt: &str,
    ) -> Result<ProviderReply, TransportError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use tokio::time::Instant;

    type Outcome = Result<ProviderReply, TransportError>;

    #[derive(Debug, Default)]
    struct Script {
        steps: VecDeque<Outcome>,
        repeat: Option<Outcome>,
    }

    /// Per-model scripted responses; records every call with its instant
    #[derive(Debug, Default)]
    pub struct ScriptedClient {
        scripts: Mutex<HashMap<String, Script>>,
        calls: Mutex<Vec<(String, Instant)>>,
    }

    impl ScriptedClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Responses returned in order for `model`
        pub fn with_steps(self, model: &str, steps: Vec<Outcome>) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .entry(model.to_string())
                .or_default()
                .steps
                .extend(steps);
            self
        }

        /// Response returned for `model` once its steps are used up
        pub fn always(self, model: &str, outcome: Outcome) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .entry(model.to_string())
                .or_default()
                .repeat = Some(outcome);
            self
        }

        pub fn calls(&self) -> Vec<(String, Instant)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn calls_for(&self, model: &str) -> Vec<Instant> {
            self.calls()
                .into_iter()
                .filter(|(m, _)| m == model)
                .map(|(_, at)| at)
                .collect()
        }
    }

    #[async_trait]
    impl GenerativeClient for ScriptedClient {
        async fn generate(
            &self,
            target: &ProviderTarget,
            _prompt: &str,
        ) -> Result<ProviderReply, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((target.model.clone(), Instant::now()));

            let mut scripts = self.scripts.lock().unwrap();
            let script = scripts.get_mut(&target.model);

            match script {
                Some(script) => match script.steps.pop_front() {
                    Some(outcome) => outcome,
                    None => script.repeat.clone().unwrap_or_else(|| {
                        Err(TransportError::network(format!(
                            "No scripted response for {}",
                            target.model
                        )))
                    }),
                },
                None => Err(TransportError::network(format!(
                    "No scripted response for {}",
                    target.model
                ))),
            }
        }
    }
}
