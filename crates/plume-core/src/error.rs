//! Error types for the Plume editor shell.

use thiserror::Error;

/// Errors from the embedded editor process - surfaced to callers unchanged.
#[derive(Debug, Error)]
pub enum NvimError {
    /// An `eval` expression failed in the editor.
    #[error("Eval error: {0}")]
    Eval(String),

    /// An ex command failed in the editor.
    #[error("Command error: {0}")]
    Command(String),

    /// Channel communication error with the session worker.
    #[error("Channel error: {0}")]
    Channel(String),

    /// The editor process is gone (exited or never started).
    #[error("Editor process unavailable")]
    Unavailable,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
