//! Result shapes handed to callers of the fallback engine

use serde::Serialize;

use crate::domain::transport::{FailureKind, TransportError};

/// Captured failure of a remote call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.kind == FailureKind::Network
    }
}

impl From<&TransportError> for Failure {
    fn from(error: &TransportError) -> Self {
        Self::new(error.kind(), error.message())
    }
}

/// Outcome of a capability call
///
/// There is no error variant: a failed remote call is always replaced by a
/// locally computed payload marked `Degraded`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope<T> {
    Success(T),
    Degraded { payload: T, failure: Failure },
}

impl<T> ResponseEnvelope<T> {
    pub fn degraded(payload: T, failure: Failure) -> Self {
        Self::Degraded { payload, failure }
    }

    pub fn payload(&self) -> &T {
        match self {
            ResponseEnvelope::Success(payload) => payload,
            ResponseEnvelope::Degraded { payload, .. } => payload,
        }
    }

    pub fn into_payload(self) -> T {
        match self {
            ResponseEnvelope::Success(payload) => payload,
            ResponseEnvelope::Degraded { payload, .. } => payload,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ResponseEnvelope::Degraded { .. })
    }

    /// True when the substitute was served because the remote was unreachable
    pub fn is_offline(&self) -> bool {
        self.failure().is_some_and(Failure::is_offline)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ResponseEnvelope::Success(_) => None,
            ResponseEnvelope::Degraded { failure, .. } => Some(failure),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        match self {
            ResponseEnvelope::Success(payload) => ResponseEnvelope::Success(f(payload)),
            ResponseEnvelope::Degraded { payload, failure } => ResponseEnvelope::Degraded {
                payload: f(payload),
                failure,
            },
        }
    }
}

#[derive(Serialize)]
struct EnvelopeWire<'a, T> {
    status: &'static str,
    degraded: bool,
    offline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a Failure>,
    data: &'a T,
}

impl<T: Serialize> Serialize for ResponseEnvelope<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = EnvelopeWire {
            status: if self.is_degraded() { "degraded" } else { "success" },
            degraded: self.is_degraded(),
            offline: self.is_offline(),
            reason: self.failure(),
            data: self.payload(),
        };

        wire.serialize(serializer)
    }
}

/// Outcome of the health probe
///
/// Unlike other capabilities the probe reports the failure instead of
/// degrading, so callers can tell "never checked" from "confirmed offline".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthProbe<T> {
    Online { report: T },
    Offline { error: Failure },
}

impl<T> HealthProbe<T> {
    pub fn is_online(&self) -> bool {
        matches!(self, HealthProbe::Online { .. })
    }
}
