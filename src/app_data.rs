use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::config::{ApplicationError, EnvironmentProvider, RegistrationSettings};
use crate::providers::RegistrationProvider;

/// Session-wide application data
///
/// Created once in `main.rs` (or once per test) and shared by the
/// coordinators. Everything here lives exactly as long as one session.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(env_provider)
///   ├─ settings (RegistrationSettings)
///   ├─ registration_provider (Arc<RegistrationProvider>, request timeout applied)
///   └─ sdk_ready (Arc<OnceCell<()>>)   shared SDK load guard
///   ↓
///   ├─ IdentityAcquisition::new(&app_data, provider)
///   └─ RegistrationCoordinator::new(&app_data, acquisition.subscribe())
/// ```
pub struct AppData {
    pub settings: RegistrationSettings,
    pub registration_provider: Arc<RegistrationProvider>,
    pub sdk_ready: Arc<OnceCell<()>>,
}

impl AppData {
    /// Load settings from the environment and build shared clients
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` when a setting is present but invalid, or the
    /// HTTP client cannot be built.
    pub fn init(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        tracing::info!("Initializing AppData...");

        let settings = RegistrationSettings::from_env_provider(env_provider)?;
        tracing::debug!(?settings, "Settings loaded");

        let app_data = Self::from_settings(settings)?;

        tracing::info!("AppData initialization complete");
        Ok(app_data)
    }

    /// Build application data from already-resolved settings
    pub fn from_settings(settings: RegistrationSettings) -> Result<Self, ApplicationError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| ApplicationError::HttpClient(e.to_string()))?;

        let registration_provider = Arc::new(RegistrationProvider::new(http_client));

        Ok(Self {
            settings,
            registration_provider,
            sdk_ready: Arc::new(OnceCell::new()),
        })
    }
}
