use std::io;

use thiserror::Error;

/// Library-wide error type for opsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Hostname did not resolve to any address.
    #[error("Failed to resolve host '{host}': {reason}")]
    HostResolution { host: String, reason: String },

    /// Certificate directory missing or not a directory.
    #[error("Certificate directory not found: {0}")]
    CertsDirNotFound(String),

    /// Certificate glob pattern could not be compiled.
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// CSV read or parse failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A date cell did not match any accepted format.
    #[error("Failed to parse date '{value}' in column '{column}'")]
    DateParse { column: String, value: String },

    /// Template file missing at the given path.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Failed to render a template with the provided context.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
