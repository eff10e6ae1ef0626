use thiserror::Error;

/// Failures reported by an identity provider implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("SDK failed to load: {0}")]
    Load(String),

    #[error("initialization failed: {0}")]
    Init(String),

    #[error("login redirect failed: {0}")]
    Login(String),

    #[error("profile fetch failed: {0}")]
    Profile(String),
}
