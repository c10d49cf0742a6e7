//! Backend transport

mod backend;

pub use backend::{BackendTransport, DEFAULT_BACKEND_URL};
