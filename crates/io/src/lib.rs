// Table file I/O: CSV/TSV and Excel

pub mod csv;
pub mod xlsx;

use std::path::Path;

use drecon_engine::Table;

/// Extensions routed to the Excel reader.
const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read a table file, picking the reader from the extension. Anything
/// not recognized as Excel goes through the CSV reader, which sniffs
/// its own delimiter. `skip_rows` counts rows above the header row.
pub fn read_table(path: &Path, skip_rows: usize) -> Result<Table, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if EXCEL_EXTENSIONS.contains(&ext.as_str()) {
        xlsx::read_table(path, skip_rows)
    } else {
        csv::read_table(path, skip_rows)
    }
}

/// Write a table, picking the writer from the extension.
pub fn write_table(table: &Table, path: &Path) -> Result<(), String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" => xlsx::write_table(table, path),
        "csv" => csv::write_table(table, path),
        other => Err(format!("Unsupported output format: .{}", other)),
    }
}
