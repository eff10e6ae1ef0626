use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::config_spec::{ConfigSpec, ConfigValueSource};
use crate::config::errors::ApplicationError;
use crate::config::{ApiKey, EnvironmentProvider};

pub const PROVIDER_APP_ID_VAR: &str = "IDENTITY_PROVIDER_APP_ID";
pub const REGISTRATION_ENDPOINT_VAR: &str = "REGISTRATION_ENDPOINT";
pub const REGISTRATION_API_KEY_VAR: &str = "REGISTRATION_API_KEY";
pub const REGISTRATION_TIMEOUT_VAR: &str = "REGISTRATION_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: &str = "15";

/// Explicit configuration for identity acquisition and registration submission
///
/// The provider app id and the endpoint are optional on purpose: their absence
/// is reported to the user when acquisition or submission runs, not at startup.
#[derive(Clone)]
pub struct RegistrationSettings {
    provider_app_id: Option<String>,
    registration_endpoint: Option<String>,
    api_key: Option<ApiKey>,
    request_timeout: Duration,
    sources: Vec<(&'static str, ConfigValueSource)>,
}

impl RegistrationSettings {
    pub fn new(
        provider_app_id: Option<String>,
        registration_endpoint: Option<String>,
        api_key: Option<ApiKey>,
    ) -> Self {
        Self {
            provider_app_id,
            registration_endpoint,
            api_key,
            request_timeout: Duration::from_secs(15),
            sources: Vec::new(),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let app_id = ConfigSpec::new(env_provider.clone())
            .env_var(PROVIDER_APP_ID_VAR)
            .load()?;

        let endpoint = ConfigSpec::new(env_provider.clone())
            .env_var(REGISTRATION_ENDPOINT_VAR)
            .validator(ConfigSpec::validate_http_url)
            .load()?;

        let api_key = ConfigSpec::new(env_provider.clone())
            .env_var(REGISTRATION_API_KEY_VAR)
            .load()?;

        let timeout = ConfigSpec::new(env_provider)
            .env_var(REGISTRATION_TIMEOUT_VAR)
            .default_value(DEFAULT_TIMEOUT_SECS)
            .validator(ConfigSpec::validate_timeout_secs)
            .load()?;

        let timeout_value = timeout.value.as_deref().unwrap_or(DEFAULT_TIMEOUT_SECS);
        let request_timeout = ConfigSpec::parse_duration_secs(timeout_value, REGISTRATION_TIMEOUT_VAR)?;

        if app_id.value.is_none() {
            tracing::warn!("{} is not set; identity acquisition will fail", PROVIDER_APP_ID_VAR);
        }
        if endpoint.value.is_none() {
            tracing::warn!("{} is not set; submissions will fail", REGISTRATION_ENDPOINT_VAR);
        }

        Ok(Self {
            provider_app_id: app_id.value,
            registration_endpoint: endpoint.value,
            api_key: api_key.value.map(ApiKey::new),
            request_timeout,
            sources: vec![
                (PROVIDER_APP_ID_VAR, app_id.source),
                (REGISTRATION_ENDPOINT_VAR, endpoint.source),
                (REGISTRATION_API_KEY_VAR, api_key.source),
                (REGISTRATION_TIMEOUT_VAR, timeout.source),
            ],
        })
    }

    pub fn provider_app_id(&self) -> Option<&str> {
        self.provider_app_id.as_deref()
    }

    pub fn registration_endpoint(&self) -> Option<&str> {
        self.registration_endpoint.as_deref()
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Where each setting was resolved from; empty when built with `new`
    pub fn sources(&self) -> &[(&'static str, ConfigValueSource)] {
        &self.sources
    }
}

impl fmt::Debug for RegistrationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationSettings")
            .field("provider_app_id", &self.provider_app_id)
            .field("registration_endpoint", &self.registration_endpoint)
            .field("api_key", &self.api_key)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl fmt::Display for RegistrationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", PROVIDER_APP_ID_VAR, self.provider_app_id.as_deref().unwrap_or("<not set>"))?;
        writeln!(
            f,
            "{}: {}",
            REGISTRATION_ENDPOINT_VAR,
            self.registration_endpoint.as_deref().unwrap_or("<not set>")
        )?;
        writeln!(
            f,
            "{}: {}",
            REGISTRATION_API_KEY_VAR,
            if self.api_key.is_some() { "<redacted>" } else { "<not set>" }
        )?;
        write!(f, "{}: {}s", REGISTRATION_TIMEOUT_VAR, self.request_timeout.as_secs())
    }
}
