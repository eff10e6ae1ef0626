use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::types::internal::Identity;

/// Profile as returned by the messaging platform's login SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    pub picture_url: Option<String>,
}

impl From<Profile> for Identity {
    fn from(profile: Profile) -> Self {
        Identity {
            id: profile.user_id,
            display_name: profile.display_name,
            avatar_url: profile.picture_url.filter(|url| !url.is_empty()),
        }
    }
}

/// Capability interface over the third-party login SDK
///
/// Acquisition only talks to the SDK through this trait, so a test double or a
/// non-browser implementation can stand in for it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Make the SDK available. Called at most once per session.
    async fn load(&self) -> Result<(), ProviderError>;

    async fn init(&self, app_id: &str) -> Result<(), ProviderError>;

    fn is_logged_in(&self) -> bool;

    /// Start the provider's login redirect. Returns once the redirect is issued.
    async fn login(&self) -> Result<(), ProviderError>;

    async fn get_profile(&self) -> Result<Profile, ProviderError>;
}
