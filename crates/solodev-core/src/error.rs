//! Error types for the Solo Dev Template

use thiserror::Error;

/// Outcome of validating the subscription form.
///
/// This is not a failure: it is rendered inline as helper text under the
/// email field. The `Display` output is the helper text itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Submit was attempted with an empty email field
    #[error("Email is required")]
    EmailRequired,
}

/// Errors raised while bootstrapping the template
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Theme file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file is not valid JSON or has the wrong shape
    #[error("Theme parse error: {0}")]
    ThemeParse(#[from] serde_json::Error),

    /// A palette entry is not a usable CSS color
    #[error("Invalid color for {field}: {value}")]
    InvalidColor { field: &'static str, value: String },

    /// A typography entry could break out of the generated stylesheet
    #[error("Invalid typography for {field}: {value}")]
    InvalidTypography { field: &'static str, value: String },

    /// Global tracing subscriber was already installed
    #[error("Logging error: {0}")]
    Logging(String),
}
