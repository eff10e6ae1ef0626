use std::path::PathBuf;
use std::sync::Arc;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;

/// Configuration for application logging
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
    pub app_log_retention_days: u32,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    ///
    /// Unparseable retention values fall back to 7 days rather than failing startup.
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        let log_level = env_provider
            .get_non_blank("LOG_LEVEL")
            .unwrap_or_else(|| "INFO".to_string());

        let app_log_file = env_provider.get_non_blank("APP_LOG_FILE").map(PathBuf::from);

        let app_log_retention_days = env_provider
            .get_non_blank("APP_LOG_RETENTION_DAYS")
            .and_then(|v| ConfigSpec::parse_u32(&v, "APP_LOG_RETENTION_DAYS").ok())
            .unwrap_or(7);

        Self {
            log_level,
            app_log_file,
            app_log_retention_days,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
pub fn init_logging(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env_provider(env_provider);

    let build_filter = || {
        EnvFilter::try_new(&config.log_level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))
    };

    // Console output goes to stderr so rendered results on stdout stay clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter()?);

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file_path) = &config.app_log_file {
        let directory = log_file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(directory)?;

        let file_name = log_file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(file_name)
            .max_log_files(config.app_log_retention_days.max(1) as usize)
            .build(directory)
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(build_filter()?);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::from_env_provider(Arc::new(MockEnvironment::empty()));

        assert_eq!(config.log_level, "INFO");
        assert!(config.app_log_file.is_none());
        assert_eq!(config.app_log_retention_days, 7);
    }

    #[test]
    fn test_logging_config_from_env() {
        let env = MockEnvironment::empty().with_vars(&[
            ("LOG_LEVEL", "debug"),
            ("APP_LOG_FILE", "/var/log/registration/app.log"),
            ("APP_LOG_RETENTION_DAYS", "30"),
        ]);

        let config = LoggingConfig::from_env_provider(Arc::new(env));

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.app_log_file, Some(PathBuf::from("/var/log/registration/app.log")));
        assert_eq!(config.app_log_retention_days, 30);
    }

    #[test]
    fn test_invalid_retention_falls_back_to_default() {
        let env = MockEnvironment::empty().with_var("APP_LOG_RETENTION_DAYS", "a week");

        let config = LoggingConfig::from_env_provider(Arc::new(env));

        assert_eq!(config.app_log_retention_days, 7);
    }
}
