//! reqwest-backed HTTP plumbing shared by the backend and provider clients

mod client;

pub use client::{HttpClient, HttpClientTrait, DEFAULT_TIMEOUT};

#[cfg(test)]
pub use client::mock;
