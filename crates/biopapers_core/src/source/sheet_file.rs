//! Spreadsheet file reader.
//!
//! # Responsibility
//! - Dispatch on file extension to the csv or workbook parser.
//! - Return the first sheet only, every cell rendered as a string.

use super::{PaperSource, SheetTable, SourceError, SourceResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

/// Spreadsheet flavor, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    /// Any format calamine reads: xlsx, xlsm, xlsb, xls, ods.
    Workbook,
}

impl SheetFormat {
    /// Detects the format from the path extension, case-insensitively.
    pub fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// File-backed paper source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetFile {
    path: PathBuf,
}

impl SheetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PaperSource for SheetFile {
    fn read_table(&self) -> SourceResult<SheetTable> {
        if !self.path.is_file() {
            return Err(SourceError::Io {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }
        match SheetFormat::detect(&self.path) {
            Some(SheetFormat::Csv) => read_csv(&self.path),
            Some(SheetFormat::Workbook) => read_workbook(&self.path),
            None => Err(SourceError::UnsupportedFormat(self.path.clone())),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn read_csv(path: &Path) -> SourceResult<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    SheetTable::from_rows(rows).ok_or(SourceError::MissingHeader)
}

fn read_workbook(path: &Path) -> SourceResult<SheetTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SourceError::MissingSheet(path.to_path_buf()))??;

    // Numeric cells render without a trailing `.0`, so a year stored as a
    // number reads back as "2019".
    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    SheetTable::from_rows(rows).ok_or(SourceError::MissingHeader)
}
