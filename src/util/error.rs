//! Unified error types for XmlTab.
//!
//! All fallible operations throughout the codebase return `Result<T, XmlTabError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.

/// Unified error type used throughout XmlTab.
///
/// Each variant captures enough context to produce an actionable message for
/// the user or for log output.
#[derive(Debug, thiserror::Error)]
pub enum XmlTabError {
    /// The selected file is not well-formed XML.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// The selected file could not be read as text.
    #[error("Could not read file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Export (CSV or JSON) failed — typically an I/O error.
    #[error("Export failed: {0}")]
    Export(String),
}

/// Convenience alias used throughout the crate.
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, XmlTabError>;
