use crate::board::{AccountType, RegistrationError, SessionError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::validation::ValidationError;
use std::fmt;

/// Everything a front end can surface to the user.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Validation(ValidationError),
    Registration(RegistrationError),
    Session(SessionError),
    NoActiveAccount,
    WrongAccountType { required: AccountType },
    UnknownVacancy(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Validation(err) => write!(f, "invalid input: {}", err),
            AppError::Registration(err) => write!(f, "registration failed: {}", err),
            AppError::Session(err) => write!(f, "account switch failed: {}", err),
            AppError::NoActiveAccount => write!(f, "no account is active; register first"),
            AppError::WrongAccountType { required } => {
                write!(f, "this action requires an active {} account", required)
            }
            AppError::UnknownVacancy(id) => write!(f, "no vacancy with id '{}'", id),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Registration(err) => Some(err),
            AppError::Session(err) => Some(err),
            AppError::NoActiveAccount
            | AppError::WrongAccountType { .. }
            | AppError::UnknownVacancy(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RegistrationError> for AppError {
    fn from(value: RegistrationError) -> Self {
        Self::Registration(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}
