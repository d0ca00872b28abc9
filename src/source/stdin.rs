//! Stdin-based record source for piped input.
//!
//! Reads the whole JSON document on `load`, so `cat records.json | txview`
//! behaves the same as passing the file path.

use super::RecordSource;
use crate::model::error::{InputError, SourceError};
use crate::model::DashboardData;
use crate::parser;
use std::io::{IsTerminal, Read};
use tracing::info;

/// Reader-backed source. Stdin in production, any reader in tests.
///
/// The reader is consumed by the first `load`; later loads see an empty
/// document and fail to parse, which mirrors re-reading an exhausted pipe.
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal),
    /// so the binary never blocks waiting for typed JSON.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader, bypassing the TTY check.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

impl<R: Read> RecordSource for StdinSource<R> {
    fn load(&mut self) -> Result<DashboardData, SourceError> {
        let mut contents = String::new();
        self.reader
            .read_to_string(&mut contents)
            .map_err(InputError::Io)?;

        let data = parser::parse_dashboard(&contents)?;
        info!(
            transactions = data.transactions.len(),
            revenue_points = data.revenue.len(),
            "Loaded records from stdin"
        );
        Ok(data)
    }
}
