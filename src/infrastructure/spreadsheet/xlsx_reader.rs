// ============================================================
// XLSX READER
// ============================================================
// Decode workbook bytes into header and data rows via calamine

use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};

use crate::domain::error::{AppError, Result};
use crate::domain::spreadsheet::{RawCell, RawRow, SheetData};

/// Decode an in-memory workbook.
///
/// Only the first worksheet is read; question-bank exports are single-sheet.
/// Row 0 is the header row. An empty sheet yields an empty row sequence.
pub fn read_workbook(bytes: &[u8]) -> Result<SheetData> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| AppError::Decode(format!("Failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Decode("Workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Decode(format!("Failed to read worksheet: {}", e)))?;

    let mut row_iter = range.rows();

    let headers: Vec<String> = match row_iter.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(SheetData::default()),
    };

    let rows = row_iter
        .enumerate()
        .map(|(index, row)| {
            let cells = headers
                .iter()
                .enumerate()
                .map(|(col, header)| {
                    let value = row.get(col).map(cell_to_string).unwrap_or_default();
                    RawCell::new(header.clone(), value)
                })
                .collect();
            RawRow::new(index, cells)
        })
        .collect();

    Ok(SheetData::new(headers, rows))
}

fn cell_to_string(cell: &Data) -> String {
    cell.as_string()
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}", cell))
}
