use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::identity_provider::{IdentityProvider, Profile};

/// Identity provider backed by a profile supplied up front
///
/// Used where no interactive login is possible, e.g. the command line: with a
/// profile the user counts as logged in, without one login fails.
pub struct PresetIdentityProvider {
    profile: Option<Profile>,
}

impl PresetIdentityProvider {
    pub fn new(profile: Option<Profile>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl IdentityProvider for PresetIdentityProvider {
    async fn load(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn init(&self, app_id: &str) -> Result<(), ProviderError> {
        tracing::debug!(app_id, "Preset identity provider initialized");
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    async fn login(&self) -> Result<(), ProviderError> {
        Err(ProviderError::Login(
            "interactive login is not available; supply a user id".to_string(),
        ))
    }

    async fn get_profile(&self) -> Result<Profile, ProviderError> {
        self.profile
            .clone()
            .ok_or_else(|| ProviderError::Profile("no profile supplied".to_string()))
    }
}
