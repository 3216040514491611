//! Conversion errors.
//!
//! The `Display` text of each variant is what the user sees in the editor,
//! so it leads with the format that failed.

/// Errors produced while converting between formats.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML Error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON that parses but does not fit a CSV table.
    #[error("Error: {0}")]
    Shape(String),

    #[error("Error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A YAML mapping key that has no JSON string form.
    #[error("Error: mapping keys must be scalars, not a {0}")]
    UnsupportedKey(&'static str),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
