// Excel table reading (xlsx, xls, xlsb, ods) and writing (xlsx only)
//
// Reading is one-way: the first worksheet is flattened to strings, typed
// cells rendered so the engine's loaders can re-parse them. Writing is a
// plain grid, no formulas or formatting.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use rust_xlsxwriter::Workbook;

use drecon_engine::Table;

/// Read the first worksheet into a table. `skip_rows` counts physical
/// sheet rows from the top, before the header row.
pub fn read_table(path: &Path, skip_rows: usize) -> Result<Table, String> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| format!("Failed to open Excel file: {}", e))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| "Excel file contains no sheets".to_string())?
        .clone();

    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| format!("Failed to read sheet '{}': {}", first, e))?;

    // Range start offset (data may not begin at A1). Sheet rows are
    // counted from the top of the sheet so skip_rows lines up with what
    // the report looks like in Excel.
    let (data_start_row, data_start_col) = range.start().unwrap_or((0, 0));

    let mut table = Table::default();
    let mut header_seen = false;
    for (row_idx, row) in range.rows().enumerate() {
        let sheet_row = data_start_row as usize + row_idx;
        if sheet_row < skip_rows {
            continue;
        }

        let mut cells: Vec<String> = vec![String::new(); data_start_col as usize];
        cells.extend(row.iter().map(render_cell));

        if header_seen {
            table.rows.push(cells);
        } else {
            table.headers = cells;
            header_seen = true;
        }
    }

    Ok(table)
}

/// Render a typed cell to the string form the engine's loaders parse.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            // Integers without decimals, so loan numbers survive re-parsing
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => format!("{}", n),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{:?}", e),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(t) if t.time() == chrono::NaiveTime::MIN => t.format("%Y-%m-%d").to_string(),
            Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format!("{}", dt.as_f64()),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

pub fn write_table(table: &Table, path: &Path) -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string(0, col_idx as u16, header)
            .map_err(|e| format!("Failed to write header ({}, {}): {}", 0, col_idx, e))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row32 = row_idx as u32 + 1;
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col16 = col_idx as u16;
            // Numeric cells go out as real numbers so amount columns can
            // be summed in a spreadsheet. Excel holds 15 significant
            // digits; longer digit runs stay text so account numbers
            // survive.
            match value.parse::<f64>() {
                Ok(n) if n.is_finite() && !exceeds_excel_precision(n) => {
                    worksheet
                        .write_number(row32, col16, n)
                        .map_err(|e| format!("Failed to write cell ({}, {}): {}", row32, col_idx, e))?;
                }
                _ => {
                    worksheet
                        .write_string(row32, col16, value)
                        .map_err(|e| format!("Failed to write cell ({}, {}): {}", row32, col_idx, e))?;
                }
            }
        }
    }

    workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {}", e))?;
    Ok(())
}

fn exceeds_excel_precision(n: f64) -> bool {
    n.trunc().abs() >= 1e15
}
