use std::fmt;

/// Errors raised while assembling the application configuration
///
/// Missing identity provider ids and endpoints are not reported here: those
/// surface to the user as configuration failures at acquisition or submission
/// time. This type covers values that are present but unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationError {
    InvalidSetting { setting_name: String, reason: String },
    ParseError { setting_name: String, error: String },
    HttpClient(String),
}

impl ApplicationError {
    pub fn invalid_setting(setting_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parse_error(setting_name: &str, error: impl Into<String>) -> Self {
        Self::ParseError {
            setting_name: setting_name.to_string(),
            error: error.into(),
        }
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { setting_name, reason } => {
                write!(f, "Invalid setting '{}': {}", setting_name, reason)
            }
            Self::ParseError { setting_name, error } => {
                write!(f, "Failed to parse setting '{}': {}", setting_name, error)
            }
            Self::HttpClient(msg) => {
                write!(f, "Failed to build HTTP client: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApplicationError {}
