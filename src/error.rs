//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Parsing is forgiving: a line that matches no export grammar becomes a
//! notification record and a row whose timestamp cannot be read is dropped.
//! Only a transcript in which *no* line is recognized surfaces as
//! [`ChatstatError::UnrecognizedFormat`]. Aggregations never fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing an export)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// None of the transcript's lines matched a known export grammar.
    ///
    /// The input is not empty, but it is not a WhatsApp chat export either.
    #[error("Unrecognized transcript format{}: none of {lines} non-blank lines matches a known WhatsApp export layout", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    UnrecognizedFormat {
        /// Number of non-blank lines inspected
        lines: usize,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The file format doesn't match the expected structure.
    ///
    /// Used for export targets, e.g. an unknown output file extension.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content or generated output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an unrecognized-format error.
    pub fn unrecognized_format(lines: usize, path: Option<PathBuf>) -> Self {
        ChatstatError::UnrecognizedFormat { lines, path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Attaches a file path to an [`UnrecognizedFormat`](Self::UnrecognizedFormat) error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ChatstatError::UnrecognizedFormat { lines, .. } => ChatstatError::UnrecognizedFormat {
                lines,
                path: Some(path.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if the transcript was not recognized.
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(self, ChatstatError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}
