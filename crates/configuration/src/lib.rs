use crate::error::ConfigError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Logging, Output, OutputFormat, Settings};

/// The file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment variables that override file settings,
/// e.g. `INSIGHTS__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "INSIGHTS";

/// Loads the application settings.
///
/// Sources are layered: built-in defaults, then the TOML file at `path` (or
/// `config.toml`; a missing file is not an error), then `INSIGHTS__*`
/// environment variables. The merged result is deserialized into our
/// strongly-typed `Settings` struct and validated.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let environment = config::Environment::with_prefix(ENV_PREFIX).separator("__");
    load_layered(path, environment)
}

fn load_layered(
    path: Option<&Path>,
    environment: config::Environment,
) -> Result<Settings, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let builder = config::Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.file_prefix", "numeric-insights.log")?
        .set_default("output.format", "pretty")?
        .add_source(config::File::from(path).required(false))
        .add_source(environment)
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if let Err(e) = EnvFilter::try_new(&settings.logging.level) {
        return Err(ConfigError::ValidationError(format!(
            "logging.level '{}' is not a valid filter: {}",
            settings.logging.level, e
        )));
    }
    if settings.logging.file_prefix.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.file_prefix must not be empty".to_string(),
        ));
    }
    Ok(())
}
