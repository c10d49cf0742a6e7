//! Domain layer - request model, outcome classification and local substitutes

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod provider;
pub mod storage;
pub mod transport;
pub mod wellness;

pub use envelope::{Failure, HealthProbe, ResponseEnvelope};
pub use error::DomainError;
