//! Application-wide error types.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
