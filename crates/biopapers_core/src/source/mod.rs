//! Tabular paper sources.
//!
//! # Responsibility
//! - Read the first sheet of a spreadsheet into a header + rows table.
//! - Map table rows onto typed paper records.
//!
//! # Invariants
//! - A table always has a header row; a source without one is an error.
//! - Cells are plain strings; typing happens in column mapping only.
//!
//! # See also
//! - `crate::library` for the fail-soft cache built on these sources.

mod columns;
mod sheet_file;

pub use columns::{parse_year, records_from_table, PaperColumn, COLUMN_ALIASES};
pub use sheet_file::{SheetFile, SheetFormat};

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

/// Data-unavailable failure while reading a paper source.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv(csv::Error),
    Workbook(calamine::Error),
    UnsupportedFormat(PathBuf),
    /// Workbook opened but contains no sheets.
    MissingSheet(PathBuf),
    /// First sheet has no header row.
    MissingHeader,
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Csv(err) => write!(f, "malformed csv: {err}"),
            Self::Workbook(err) => write!(f, "malformed workbook: {err}"),
            Self::UnsupportedFormat(path) => {
                write!(f, "unsupported spreadsheet format: `{}`", path.display())
            }
            Self::MissingSheet(path) => write!(f, "workbook `{}` has no sheets", path.display()),
            Self::MissingHeader => write!(f, "sheet has no header row"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
            Self::Workbook(err) => Some(err),
            Self::UnsupportedFormat(_) | Self::MissingSheet(_) | Self::MissingHeader => None,
        }
    }
}

impl From<csv::Error> for SourceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<calamine::Error> for SourceError {
    fn from(value: calamine::Error) -> Self {
        Self::Workbook(value)
    }
}

/// First-sheet contents as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Builds a table from a header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Splits the first row off as header; `None` when there are no rows.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let headers = rows.remove(0);
        Some(Self { headers, rows })
    }
}

/// Anything that can produce the raw paper table.
pub trait PaperSource {
    /// Reads the full table. Called at most once per successful load.
    fn read_table(&self) -> SourceResult<SheetTable>;
    /// Short description for diagnostics (path, name).
    fn describe(&self) -> String;
}

impl PaperSource for SheetTable {
    fn read_table(&self) -> SourceResult<SheetTable> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory table ({} rows)", self.rows.len())
    }
}
