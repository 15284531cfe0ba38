use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::board::Language;
use crate::validation::rules::DEFAULT_PASSWORD_MIN_LENGTH;
use crate::validation::RegistrationPolicy;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
    pub language: Language,
    pub registration: RegistrationPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = env::var("APP_DATA_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(StorageConfig::default_data_dir);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) => LogFormat::Compact,
        };

        let language = match env::var("APP_LANGUAGE") {
            Ok(value) => value
                .parse::<Language>()
                .map_err(|_| ConfigError::InvalidLanguage { value })?,
            Err(_) => Language::default(),
        };

        let password_min_length = match env::var("APP_PASSWORD_MIN_LENGTH") {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => return Err(ConfigError::InvalidPasswordMinLength { value }),
            },
            Err(_) => DEFAULT_PASSWORD_MIN_LENGTH,
        };

        Ok(Self {
            environment,
            storage: StorageConfig { data_dir },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            language,
            registration: RegistrationPolicy {
                password_min_length,
            },
        })
    }
}

/// Where the collection files live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Platform data directory, or `./hirenow-data` when the platform has
    /// none.
    pub fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "hirenow")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("hirenow-data"))
    }
}

/// Log output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLanguage { value: String },
    InvalidLogFormat { value: String },
    InvalidPasswordMinLength { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLanguage { value } => {
                write!(f, "APP_LANGUAGE must be 'uk' or 'en' (got '{value}')")
            }
            ConfigError::InvalidLogFormat { value } => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (got '{value}')")
            }
            ConfigError::InvalidPasswordMinLength { value } => write!(
                f,
                "APP_PASSWORD_MIN_LENGTH must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
