mod api_key;
pub mod config_spec;
mod env_provider;
pub mod errors;
mod logging;
pub mod registration_settings;

pub use api_key::ApiKey;
pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{LoggingConfig, LoggingError, init_logging};
pub use registration_settings::RegistrationSettings;
