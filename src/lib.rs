//! EQ Coach client
//!
//! Client-side access to the EQ Coach wellness backend:
//! - Single-call transport with bearer credentials and a fixed deadline
//! - Capability calls that fall back to local substitutes when the backend fails
//! - Direct generative-text rewrites with ordered-target failover and backoff

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
