//! File-based record source.

use super::RecordSource;
use crate::model::error::{InputError, SourceError};
use crate::model::DashboardData;
use crate::parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON file source. The file is re-read on every `load`, so calling it
/// again picks up edits made since the last load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn load(&mut self) -> Result<DashboardData, SourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InputError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                InputError::Io(e)
            }
        })?;

        let data = parser::parse_dashboard(&contents)?;
        info!(
            path = %self.path.display(),
            transactions = data.transactions.len(),
            revenue_points = data.revenue.len(),
            "Loaded records from file"
        );
        Ok(data)
    }
}
