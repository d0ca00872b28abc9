//! Error types for txview.
//!
//! Errors are `thiserror` enums composed under [`AppError`] via `From`, so
//! every layer propagates with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's run loop
//!   - [`InputError`] - Record file/stdin reading failures
//!   - [`ParseError`] - Malformed transaction payloads
//!   - [`ConfigError`](crate::config::ConfigError) - Unreadable or invalid config
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!
//! The view engine itself never returns errors: out-of-range page requests
//! are ignored and empty results are a normal state.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use txview::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_records()?;
///     Ok(())
/// }
/// # fn read_records() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Record payload could not be parsed.
    #[error("Failed to parse transactions: {0}")]
    Parse(#[from] ParseError),

    /// Config file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing the rendered table failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading record input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified record file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use txview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a JSON payload into transactions.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Payload is not valid JSON or does not have the expected shape.
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// serde_json's description, including line and column.
        message: String,
    },

    /// A record has an empty required field.
    #[error("Missing required field '{field}' in transaction #{index}")]
    MissingField {
        /// Zero-based position of the record in the payload.
        index: usize,
        field: &'static str,
    },

    /// A record's timestamp is not valid RFC 3339.
    #[error("Invalid timestamp '{raw}' in transaction #{index}")]
    InvalidTimestamp { index: usize, raw: String },

    /// A record's status is not one of the known statuses.
    #[error("Unknown status '{raw}' in transaction #{index}")]
    InvalidStatus { index: usize, raw: String },

    /// A KPI metric's trend direction is neither `up` nor `down`.
    #[error("Unknown trend direction '{raw}' in KPI metric #{index}")]
    InvalidTrendDirection { index: usize, raw: String },
}

/// Errors a [`RecordSource`](crate::source::RecordSource) can produce.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Input(e) => AppError::InputRead(e),
            SourceError::Parse(e) => AppError::Parse(e),
        }
    }
}
