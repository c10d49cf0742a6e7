//! Bearer credential used to authenticate against the backend

mod credential;

pub use credential::{Credential, CREDENTIAL_STORAGE_KEY};
