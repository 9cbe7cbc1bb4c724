//! Error types for the report library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all checklist and report operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// No flows were selected; a queue cannot be built from nothing
    #[error("Selection is empty: choose at least one service flow")]
    EmptySelection,
    /// A selected flow id does not exist in the catalog
    #[error("Flow '{id}' not found in catalog")]
    UnknownFlow { id: String },
    /// Both members of a mutual-exclusivity pair were selected
    #[error("Flows '{first}' and '{second}' are mutually exclusive")]
    ExclusiveConflict { first: String, second: String },
    /// A capture was recorded after the queue was already exhausted
    #[error("Capture queue is already complete")]
    QueueExhausted,
    /// Composition was requested before every step had been visited
    #[error("Checklist is incomplete: {remaining} step(s) remaining")]
    IncompleteSession { remaining: usize },
    /// Image bytes could not be decoded or re-encoded
    #[error("Image error: {message}")]
    Image {
        message: String,
        #[source]
        source: image::ImageError,
    },
    /// The PDF backend itself failed; no partial artifact is produced
    #[error("PDF rendering error: {message}")]
    Pdf { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors (catalog files)
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// No export capability in the fallback chain was available
    #[error("Export action '{action}' is not supported on this system")]
    ExportUnsupported { action: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ReportError {
    /// Creates an image error with additional context.
    pub fn image(message: impl Into<String>, source: image::ImageError) -> Self {
        Self::Image {
            message: message.into(),
            source,
        }
    }

    /// Creates a PDF backend error from any displayable cause.
    pub fn pdf(cause: impl fmt::Display) -> Self {
        Self::Pdf {
            message: cause.to_string(),
        }
    }

    /// Creates a file system error for a path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to ReportError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ReportError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for checklist and report operations
pub type Result<T> = std::result::Result<T, ReportError>;
