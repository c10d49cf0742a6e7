//! Infrastructure layer - HTTP, storage and provider implementations

pub mod credentials;
pub mod http;
pub mod logging;
pub mod provider;
pub mod services;
pub mod storage;
pub mod transport;
