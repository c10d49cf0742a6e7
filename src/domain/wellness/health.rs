use serde::{Deserialize, Serialize};

/// Body of the backend's `/health` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub retriever_ready: bool,
    #[serde(default)]
    pub ai_enabled: bool,
}
