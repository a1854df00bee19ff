use thiserror::Error;

/// Failures raised while building a vehicle or loading settings.
///
/// Tick-time code never returns these; bad configuration is caught at setup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
