//! Error types for panlatex library.

use std::io;
use thiserror::Error;

/// Result type alias for panlatex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while filtering a document tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing the document channels.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid pandoc JSON tree.
    #[error("Malformed document tree: {0}")]
    Json(#[from] serde_json::Error),

    /// A node holds content the decomposer cannot render.
    #[error("Unsupported {found} node in {context}")]
    UnsupportedNode {
        /// Where the node was found (e.g. "table cell")
        context: &'static str,
        /// Kind of the offending node
        found: &'static str,
    },

    /// A rendering template is invalid or references an unknown field.
    #[error("Template error: {0}")]
    Template(String),

    /// Error while producing output markup.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedNode {
            context: "table cell",
            found: "CodeBlock",
        };
        assert_eq!(err.to_string(), "Unsupported CodeBlock node in table cell");

        let err = Error::Template("unknown placeholder $foo".to_string());
        assert_eq!(err.to_string(), "Template error: unknown placeholder $foo");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Malformed document tree"));
    }
}
