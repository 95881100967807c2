use thiserror::Error;

/// Errors that can occur around recipe normalization.
///
/// Normalizing a completion never fails; these come from building requests,
/// loading configuration and the command line front end.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The user input was empty or only whitespace
    #[error("User input must not be empty")]
    EmptyInput,

    /// The request mode was neither ingredients nor name
    #[error("Unknown request mode: {0}")]
    UnknownMode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to read input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
