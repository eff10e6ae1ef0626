use crate::errors::RegistrationError;
use crate::types::internal::Identity;

/// View state published by identity acquisition
///
/// `identity` and `error` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquisitionState {
    pub loading: bool,
    pub identity: Option<Identity>,
    pub error: Option<RegistrationError>,
}

impl AcquisitionState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn acquired(identity: Identity) -> Self {
        Self {
            loading: false,
            identity: Some(identity),
            error: None,
        }
    }

    pub fn failed(error: RegistrationError) -> Self {
        Self {
            loading: false,
            identity: None,
            error: Some(error),
        }
    }

    /// Settled without identity or error, e.g. after a login redirect
    pub fn idle() -> Self {
        Self::default()
    }
}

/// How a single `acquire()` call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    Acquired(Identity),
    /// The user was sent to the provider's login; acquisition runs again afterwards
    RedirectedToLogin,
    Failed(RegistrationError),
    /// The hosting view was torn down before the flow settled
    Cancelled,
}
