//! Single outbound call: request description, outcome classification, transport seam

mod error;
mod request;
mod client;

pub use error::{FailureKind, TransportError};
pub use request::{HttpMethod, RequestDescriptor, RequestDescriptorBuilder};
pub use client::Transport;

#[cfg(test)]
pub use client::MockTransport;
