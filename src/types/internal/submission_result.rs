use crate::errors::RegistrationError;
use crate::types::dto::RegistrationResponse;

/// Outcome of one submission attempt, kept only for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success {
        message: String,
        contract_code: Option<String>,
    },
    /// `error` is `None` when the endpoint itself answered `ok: false`
    Failure {
        message: String,
        error: Option<RegistrationError>,
    },
}

impl SubmissionResult {
    pub fn from_error(error: RegistrationError) -> Self {
        Self::Failure {
            message: error.to_string(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    pub fn contract_code(&self) -> Option<&str> {
        match self {
            Self::Success { contract_code, .. } => contract_code.as_deref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&RegistrationError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => error.as_ref(),
        }
    }
}

impl From<RegistrationResponse> for SubmissionResult {
    /// The endpoint's `ok` flag and message are trusted as-is; an empty
    /// contract code is treated as absent.
    fn from(response: RegistrationResponse) -> Self {
        if response.ok {
            Self::Success {
                message: response.message,
                contract_code: response.contract_code.filter(|code| !code.is_empty()),
            }
        } else {
            Self::Failure {
                message: response.message,
                error: None,
            }
        }
    }
}

impl From<RegistrationError> for SubmissionResult {
    fn from(error: RegistrationError) -> Self {
        Self::from_error(error)
    }
}
