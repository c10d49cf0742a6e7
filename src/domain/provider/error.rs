use thiserror::Error;

const BUSY_MESSAGE: &str = "The assistant is busy right now. Please try again later.";
const GENERIC_MESSAGE: &str = "Something went wrong while contacting the assistant. Please try again.";

/// Failures of a direct provider invocation
#[derive(Debug, Clone, Error)]
pub enum InvokerError {
    #[error("Provider overloaded ({model}): {message}")]
    Overloaded { model: String, message: String },

    #[error("Provider rejected request ({model}): {message}")]
    Application {
        model: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Provider unreachable ({model}): {message}")]
    Network { model: String, message: String },

    #[error("All provider targets exhausted after {attempts} attempts: {last_error}")]
    ExhaustedRetries {
        attempts: u32,
        last_error: Box<InvokerError>,
    },

    #[error("No provider targets configured")]
    NoTargets,
}

impl InvokerError {
    pub fn is_overload(&self) -> bool {
        match self {
            InvokerError::Overloaded { .. } => true,
            InvokerError::ExhaustedRetries { last_error, .. } => last_error.is_overload(),
            _ => false,
        }
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> &'static str {
        if self.is_overload() {
            BUSY_MESSAGE
        } else {
            GENERIC_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overloaded() -> InvokerError {
        InvokerError::Overloaded {
            model: "gemini-1.5-flash".to_string(),
            message: "The model is overloaded.".to_string(),
        }
    }

    #[test]
    fn test_exhausted_overload_reads_busy() {
        let error = InvokerError::ExhaustedRetries {
            attempts: 6,
            last_error: Box::new(overloaded()),
        };

        assert!(error.is_overload());
        assert_eq!(error.user_message(), BUSY_MESSAGE);
        assert!(error.to_string().contains("after 6 attempts"));
    }

    #[test]
    fn test_other_errors_read_generic() {
        let error = InvokerError::Application {
            model: "m".to_string(),
            status: Some(400),
            message: "API key not valid".to_string(),
        };

        assert_eq!(error.user_message(), GENERIC_MESSAGE);

        let exhausted = InvokerError::ExhaustedRetries {
            attempts: 3,
            last_error: Box::new(InvokerError::Network {
                model: "m".to_string(),
                message: "connection refused".to_string(),
            }),
        };
        assert_eq!(exhausted.user_message(), GENERIC_MESSAGE);
        assert_eq!(InvokerError::NoTargets.user_message(), GENERIC_MESSAGE);
    }
}
