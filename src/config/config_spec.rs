use std::sync::Arc;
use std::time::Duration;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
    Unset,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: Option<String>,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment variable → default priority
///
/// Blank environment values count as unset. Optional settings with no value
/// load successfully as `None` so the caller can decide how absence surfaces.
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_var: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_var: None,
            default_value: None,
            required: false,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_var(mut self, name: &str) -> Self {
        self.env_var = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    fn setting_name(&self) -> &str {
        self.env_var.as_deref().unwrap_or("unknown_setting")
    }

    /// Load the setting, recording where the value came from
    pub fn load(&self) -> Result<ConfigValue, ApplicationError> {
        if let Some(env_var) = &self.env_var {
            if let Some(value) = self.env_provider.get_non_blank(env_var) {
                self.validate_value(&value)?;

                return Ok(ConfigValue {
                    value: Some(value),
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default)?;

            return Ok(ConfigValue {
                value: Some(default.clone()),
                source: ConfigValueSource::Default,
            });
        }

        if self.required {
            return Err(ApplicationError::invalid_setting(
                self.setting_name(),
                "Required setting has no value from any source",
            ));
        }

        Ok(ConfigValue {
            value: None,
            source: ConfigValueSource::Unset,
        })
    }

    /// Apply the length and custom validators to a value
    pub fn validate_value(&self, value: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::invalid_setting(
                    self.setting_name(),
                    format!("Value must be at least {} characters long", min_len),
                ));
            }
        }

        if let Some(validator) = self.validator {
            validator(value)
                .map_err(|reason| ApplicationError::invalid_setting(self.setting_name(), reason))?;
        }

        Ok(())
    }
}

/// Validators and parsers shared by the settings types
impl ConfigSpec {
    /// Accepts absolute `http` or `https` URLs only
    pub fn validate_http_url(value: &str) -> Result<(), String> {
        let url = reqwest::Url::parse(value).map_err(|e| format!("Not a valid URL: {}", e))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(format!("URL scheme must be http or https, got '{}'", other)),
        }
    }

    pub fn validate_timeout_secs(value: &str) -> Result<(), String> {
        match value.parse::<u64>() {
            Ok(secs) if (1..=300).contains(&secs) => Ok(()),
            Ok(secs) => Err(format!("Timeout {} is outside valid range 1-300 seconds", secs)),
            Err(_) => Err(format!("Expected a whole number of seconds, got '{}'", value)),
        }
    }

    pub fn parse_duration_secs(value: &str, setting_name: &str) -> Result<Duration, ApplicationError> {
        let secs = value.trim().parse::<u64>().map_err(|e| {
            ApplicationError::parse_error(
                setting_name,
                format!("Expected positive integer for seconds, got '{}': {}", value, e),
            )
        })?;

        Ok(Duration::from_secs(secs))
    }

    pub fn parse_u32(value: &str, setting_name: &str) -> Result<u32, ApplicationError> {
        value.trim().parse::<u32>().map_err(|e| {
            ApplicationError::parse_error(setting_name, format!("Expected integer, got '{}': {}", value, e))
        })
    }
}
