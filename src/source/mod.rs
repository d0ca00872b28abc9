//! Record sources.
//!
//! The view engine never fetches data itself. A [`RecordSource`] supplies
//! the raw collection (plus the revenue series) and the caller hands it to
//! [`TransactionView::set_records`](crate::state::TransactionView::set_records).
//!
//! - [`StaticSource`] for data already in memory
//! - [`FileSource`] for a JSON file
//! - [`StdinSource`] for piped JSON
//! - [`InputSource`] picks file or stdin from the command line

use crate::model::error::{InputError, SourceError};
use crate::model::{DashboardData, Transaction};
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Capability that supplies the raw record collection.
pub trait RecordSource {
    /// Produce the current dashboard data.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the underlying input cannot be read or parsed.
    fn load(&mut self) -> Result<DashboardData, SourceError>;
}

/// In-memory source. Hands out a copy of its data on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    data: DashboardData,
}

impl StaticSource {
    pub fn new(data: DashboardData) -> Self {
        Self { data }
    }

    /// Source with transactions only and no revenue series.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self::new(DashboardData {
            transactions,
            ..DashboardData::default()
        })
    }
}

impl RecordSource for StaticSource {
    fn load(&mut self) -> Result<DashboardData, SourceError> {
        Ok(self.data.clone())
    }
}

/// Unified input source for the binary.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    File(FileSource),
    Stdin(StdinSource<std::io::Stdin>),
}

impl RecordSource for InputSource {
    fn load(&mut self) -> Result<DashboardData, SourceError> {
        match self {
            InputSource::File(f) => f.load(),
            InputSource::Stdin(s) => s.load(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: FileSource
/// 2. Else if stdin is piped: StdinSource
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is provided and stdin is a TTY.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
