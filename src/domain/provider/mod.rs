//! Generative-text provider access with ordered-target failover

mod client;
mod error;
mod invoker;
mod reply;
mod target;

pub use client::GenerativeClient;
pub use error::InvokerError;
pub use invoker::{Generation, RetryPolicy, RetryingInvoker};
pub use reply::{ProviderErrorBody, ProviderReply};
pub use target::ProviderTarget;

#[cfg(test)]
pub use client::mock;
