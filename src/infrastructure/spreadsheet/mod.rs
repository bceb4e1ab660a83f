// ============================================================
// SPREADSHEET DECODING
// ============================================================
// Turn uploaded file bytes into ordered RawRow sequences

mod csv_reader;
mod xlsx_reader;

pub use csv_reader::read_csv;
pub use xlsx_reader::read_workbook;

use crate::domain::error::{AppError, Result};
use crate::domain::spreadsheet::SheetData;

/// Upload formats the pipeline accepts, gated on the file extension before
/// any decode work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Xlsx,
    Csv,
}

impl FileFormat {
    /// Classify a file by its extension. The check runs first so a wrong
    /// upload produces a specific message instead of a decode failure.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => Ok(FileFormat::Xlsx),
            "csv" => Ok(FileFormat::Csv),
            "" => Err(AppError::UnsupportedFormat(format!(
                "'{}' has no file extension, expected .xlsx or .csv",
                file_name
            ))),
            other => Err(AppError::UnsupportedFormat(format!(
                ".{} files are not supported, expected .xlsx or .csv",
                other
            ))),
        }
    }
}

/// Decode uploaded bytes into header and data rows.
pub fn decode(file_name: &str, bytes: &[u8]) -> Result<SheetData> {
    match FileFormat::from_file_name(file_name)? {
        FileFormat::Xlsx => read_workbook(bytes),
        FileFormat::Csv => read_csv(bytes),
    }
}
