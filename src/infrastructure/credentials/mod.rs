//! Active credential holder

mod store;

pub use store::CredentialStore;
