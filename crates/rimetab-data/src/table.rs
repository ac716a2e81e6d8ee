//! Loader for the character rule grid.

use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use rimetab_types::{CellPos, RuleTable};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read rule table: {0}")]
    Io(#[from] io::Error),
    #[error("malformed rule table: {0}")]
    Csv(#[from] csv::Error),
}

/// Read and parse a rule grid file.
pub fn load_rule_table(path: impl AsRef<Path>) -> Result<RuleTable, TableError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = parse_rule_table(file)?;
    info!(
        "rule table {}: {} rows, {} mapped characters",
        path.display(),
        table.row_count(),
        table.char_count()
    );
    Ok(table)
}

/// Scan a comma-separated grid into a [`RuleTable`].
///
/// The first line is a column header and carries no mappings; data rows are
/// indexed from zero below it. Column 0 of each data row is recorded as the
/// row's spelling fragment. Cells are visited in row-major order; a cell
/// holding exactly one character maps that character to its (row, column)
/// position, and a character appearing in several cells keeps the last
/// position visited. Cells holding more than one character produce no
/// mapping: a multi-character key can never match a single-character
/// lookup. Rows may be ragged; missing trailing cells read as empty.
pub fn parse_rule_table<R: io::Read>(reader: R) -> Result<RuleTable, TableError> {
    let mut grid = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut table = RuleTable::default();
    for record in grid.records() {
        let record = record?;
        let row = table.push_row(record.get(0).unwrap_or_default().to_string());
        for (col, cell) in record.iter().enumerate() {
            let mut chars = cell.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                table.map_char(ch, CellPos { row, col });
            }
        }
    }
    Ok(table)
}
