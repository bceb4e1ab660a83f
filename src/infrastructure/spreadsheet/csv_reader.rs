// ============================================================
// CSV READER
// ============================================================
// Decode CSV bytes with encoding fallback for legacy exports

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::spreadsheet::{RawCell, RawRow, SheetData};

/// Decode in-memory CSV content. Row 0 is the header row.
pub fn read_csv(bytes: &[u8]) -> Result<SheetData> {
    let content = decode_text(bytes);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Decode(format!("Failed to read CSV headers: {}", e)))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| AppError::Decode(format!("Failed to parse CSV row {}: {}", index + 1, e)))?;

        let cells = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let value = record.get(col).unwrap_or("").to_string();
                RawCell::new(header.clone(), value)
            })
            .collect();

        rows.push(RawRow::new(index, cells));
    }

    Ok(SheetData::new(headers, rows))
}

/// UTF-8 first, Windows-1252 as the fallback for legacy spreadsheet tools.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}
