//! Frequency reports over a fixed source file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::frequency_table::{FrequencyTable, FrequencyView};
use crate::error::AppError;

/// Produces frequency reports for one source file.
///
/// Each report re-reads the file, so edits between reports are picked up.
pub struct FrequencyService {
    source: PathBuf,
}

impl FrequencyService {
    /// Creates a service reading from `source`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Reads the source file and counts its lines.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the file is missing or unreadable.
    pub fn load(&self) -> Result<FrequencyTable, AppError> {
        let table = FrequencyTable::open(&self.source)?;
        debug!(
            source = %self.source.display(),
            lines = table.total(),
            distinct = table.len(),
            "Loaded frequency table"
        );
        Ok(table)
    }

    /// Writes the requested view to `out`, one line per entry.
    ///
    /// Returns the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the source cannot be read and
    /// [`AppError::Output`] if writing fails.
    pub fn print<W: Write>(&self, view: &FrequencyView, out: &mut W) -> Result<usize, AppError> {
        let lines = self.load()?.render(view);
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(lines.len())
    }
}
