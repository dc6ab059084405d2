//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the settings source is loaded and the
//! configured level is known. `RUST_LOG` takes precedence over the configured
//! level so verbosity can be raised without editing settings.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber.
///
/// `level` accepts standard level strings: `"error"`, `"warn"`, `"info"`,
/// `"debug"`, `"trace"`. It is validated up front so a bad `Logging:Level`
/// setting fails loudly instead of silently filtering everything out.
pub fn init(level: &str) -> Result<(), AppError> {
    let configured = parse_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(configured.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

/// Parse a log level string into a [`LevelFilter`], returning an error on
/// unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.trim().is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
