use std::fmt;

use crate::domain::DomainError;

/// Well-known key under which the active credential is persisted
pub const CREDENTIAL_STORAGE_KEY: &str = "auth_token";

/// Opaque bearer token issued by the external auth flow
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into().trim().to_string();

        if token.is_empty() {
            return Err(DomainError::credential("Bearer token must not be empty"));
        }

        Ok(Self(token))
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let cred = Credential::new("tok-123").unwrap();

        assert_eq!(cred.token(), "tok-123");
        assert_eq!(cred.bearer_header(), "Bearer tok-123");
    }

    #[test]
    fn test_credential_trims_whitespace() {
        let cred = Credential::new("  tok-123\n").unwrap();
        assert_eq!(cred.token(), "tok-123");
    }

    #[test]
    fn test_empty_credential_rejected() {
        assert!(Credential::new("").is_err());
        assert!(Credential::new("   ").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let cred = Credential::new("super-secret").unwrap();
        let debug = format!("{:?}", cred);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
