use thiserror::Error;

/// Failure of a call to one of the third-party services
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, timeout, non-2xx status or unparsable body
    #[error("{context}: {message}")]
    SourceUnavailable {
        context: &'static str,
        message: String,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),

    /// The upstream answered but reported a failure of its own
    #[error("{message}")]
    Rejected {
        context: &'static str,
        message: String,
    },

    #[error("{0}")]
    InvalidInput(String),
}

impl FetchError {
    pub(crate) fn unavailable(context: &'static str, message: impl ToString) -> Self {
        Self::SourceUnavailable {
            context,
            message: message.to_string(),
        }
    }
}
