use thiserror::Error;

use super::ProviderError;

/// How an error is expected to be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required setting is missing; only an operator can fix it
    Operator,
    /// The identity provider is unreachable or the user is not authenticated
    Provider,
    /// The user must correct the form
    UserInput,
    /// The endpoint or the network failed; the user may retry manually
    Transport,
}

/// Every failure the acquisition and submission flows can end in
///
/// Transport and parse failures are captured as strings so results stay
/// `Clone` and can be stored as the last rendered outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Identity provider could not be loaded: {0}")]
    ProviderLoad(String),

    #[error("Identity provider authentication failed ({0}). Please open this page from the messaging app")]
    ProviderAuth(String),

    #[error("No verified account is available yet")]
    MissingIdentity,

    #[error("Consent is required to register")]
    ConsentRequired,

    #[error("Enter a phone number with at least 9 digits or a storage code")]
    InsufficientContactInfo,

    #[error("A registration request is already in progress")]
    SubmissionInProgress,

    #[error("Registration failed: server responded with status {status}")]
    Server { status: u16 },

    #[error("Registration failed: malformed response from server")]
    MalformedResponse(String),

    #[error("Request failed, please retry")]
    Network(String),
}

impl RegistrationError {
    pub fn provider_id_missing() -> Self {
        Self::Configuration("identity provider id missing".to_string())
    }

    pub fn endpoint_missing() -> Self {
        Self::Configuration("registration endpoint missing".to_string())
    }

    /// Stable identifier for logs and machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::ProviderLoad(_) => "provider_load_error",
            Self::ProviderAuth(_) => "provider_auth_error",
            Self::MissingIdentity => "missing_identity",
            Self::ConsentRequired => "consent_required",
            Self::InsufficientContactInfo => "insufficient_contact_info",
            Self::SubmissionInProgress => "submission_in_progress",
            Self::Server { .. } => "server_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Network(_) => "network_error",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Operator,
            Self::ProviderLoad(_) | Self::ProviderAuth(_) | Self::MissingIdentity => ErrorCategory::Provider,
            Self::ConsentRequired | Self::InsufficientContactInfo | Self::SubmissionInProgress => {
                ErrorCategory::UserInput
            }
            Self::Server { .. } | Self::MalformedResponse(_) | Self::Network(_) => ErrorCategory::Transport,
        }
    }
}

impl From<ProviderError> for RegistrationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Load(msg) => Self::ProviderLoad(msg),
            other => Self::ProviderAuth(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for RegistrationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
