//! Reading scanner CSV exports.
//!
//! The export's first row names the columns; only `Quantity` and `Name` are
//! used, looked up by header name. The export tool appends a junk row with an
//! empty quantity, which is dropped here rather than reported.

use std::fs;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info};

use crate::error::{ExportError, Result};
use crate::models::{CardRecord, NAME_COLUMN, QUANTITY_COLUMN};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const DEFAULT_DELIMITER: u8 = b',';

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryColumns {
    pub quantity: usize,
    pub name: usize,
}

impl InventoryColumns {
    /// Locate the required columns, naming the first one that is missing.
    ///
    /// When a header is repeated the last occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> std::result::Result<Self, &'static str> {
        let position = |column: &'static str| {
            headers
                .iter()
                .collect::<Vec<_>>()
                .into_iter()
                .rposition(|header| header == column)
                .ok_or(column)
        };
        Ok(Self {
            quantity: position(QUANTITY_COLUMN)?,
            name: position(NAME_COLUMN)?,
        })
    }
}

/// Reads every card from a scanner export, in file order.
pub fn read_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ExportError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Reading scanner export: {}", path.display());
    let content = fs::read(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Export size: {} bytes", content.len());

    parse_inventory(&content, path)
}

/// Parses export content already in memory. `path` is only used for error
/// messages.
pub fn parse_inventory(content: &[u8], path: &Path) -> Result<Vec<CardRecord>> {
    let (delimiter, offset) = detect_delimiter(content);
    // The hint line is consumed before the CSV reader sees the content.
    let hint_lines = u64::from(content[..offset].contains(&b'\n'));
    if delimiter != DEFAULT_DELIMITER {
        debug!("Using delimiter {:?} from sep= hint", delimiter as char);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(&content[offset..]);

    let headers = rdr
        .headers()
        .map_err(|source| ExportError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns =
        InventoryColumns::from_headers(&headers).map_err(|column| ExportError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })?;

    let mut cards = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let record = result.map_err(|source| ExportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(0, |pos| pos.line()) + hint_lines;

        // A row too short to reach the quantity column counts as empty.
        let quantity = record.get(columns.quantity).unwrap_or("");
        let name = record.get(columns.name);
        let Some(card) = CardRecord::new(quantity, name.unwrap_or_default()) else {
            debug!("Skipping row at line {line}: empty {QUANTITY_COLUMN}");
            skipped += 1;
            continue;
        };

        if name.is_none() {
            return Err(ExportError::MalformedRow {
                path: path.to_path_buf(),
                line,
                reason: format!(
                    "row has {} fields, no value for column '{NAME_COLUMN}'",
                    record.len()
                ),
            });
        }
        cards.push(card);
    }

    info!(
        "Read {} cards from {} ({} rows skipped)",
        cards.len(),
        path.display(),
        skipped
    );
    Ok(cards)
}

/// Detects a spreadsheet `sep=<c>` hint on the first line.
///
/// Returns the delimiter to use and the byte offset where the CSV body starts
/// (past a UTF-8 BOM and the hint line, if any).
pub fn detect_delimiter(content: &[u8]) -> (u8, usize) {
    let start = if content.starts_with(UTF8_BOM) {
        UTF8_BOM.len()
    } else {
        0
    };
    let body = &content[start..];
    let line_end = body
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(body.len());

    let mut line = &body[..line_end];
    if let Some(stripped) = line.strip_suffix(b"\r") {
        line = stripped;
    }
    if line.len() >= 2 && line[0] == b'"' && line[line.len() - 1] == b'"' {
        line = &line[1..line.len() - 1];
    }

    if line.len() == 5 && line[..4].eq_ignore_ascii_case(b"sep=") {
        let next = (start + line_end + 1).min(content.len());
        return (line[4], next);
    }
    (DEFAULT_DELIMITER, start)
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
