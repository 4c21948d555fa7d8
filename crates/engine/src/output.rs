//! Output table rendering.
//!
//! One row per joined record: the bank side's original columns, the derived
//! reference columns, the disbursement side's original columns, then the
//! date distance. Header names colliding across the two sources get
//! `_bank` / `_disbursement` suffixes. Cells for an absent side are blank.

use std::collections::HashSet;

use crate::model::JoinedRecord;
use crate::table::Table;

pub const R_NUMBER_COLUMN: &str = "R-Number";
pub const UNIQUE_REFERENCE_COLUMN: &str = "Unique Reference";
pub const DATE_DIFF_COLUMN: &str = "date_diff";

const BANK_SUFFIX: &str = "_bank";
const DISBURSEMENT_SUFFIX: &str = "_disbursement";

pub fn joined_table(
    rows: &[JoinedRecord],
    bank_headers: &[String],
    disbursement_headers: &[String],
) -> Table {
    let collisions: HashSet<&String> = bank_headers
        .iter()
        .filter(|h| disbursement_headers.contains(h))
        .collect();

    let mut headers = Vec::with_capacity(bank_headers.len() + disbursement_headers.len() + 3);
    for h in bank_headers {
        if collisions.contains(h) {
            headers.push(format!("{h}{BANK_SUFFIX}"));
        } else {
            headers.push(h.clone());
        }
    }
    headers.push(R_NUMBER_COLUMN.into());
    headers.push(UNIQUE_REFERENCE_COLUMN.into());
    for h in disbursement_headers {
        if collisions.contains(h) {
            headers.push(format!("{h}{DISBURSEMENT_SUFFIX}"));
        } else {
            headers.push(h.clone());
        }
    }
    headers.push(DATE_DIFF_COLUMN.into());

    let mut out_rows = Vec::with_capacity(rows.len());
    for rec in rows {
        let mut row: Vec<String> = Vec::with_capacity(headers.len());
        for i in 0..bank_headers.len() {
            row.push(
                rec.bank
                    .as_ref()
                    .and_then(|b| b.raw.get(i))
                    .cloned()
                    .unwrap_or_default(),
            );
        }
        row.push(
            rec.bank
                .as_ref()
                .and_then(|b| b.reference.clone())
                .unwrap_or_default(),
        );
        row.push(rec.key.clone().unwrap_or_default());
        for i in 0..disbursement_headers.len() {
            row.push(
                rec.disbursement
                    .as_ref()
                    .and_then(|d| d.raw.get(i))
                    .cloned()
                    .unwrap_or_default(),
            );
        }
        row.push(rec.date_diff.map(|d| d.to_string()).unwrap_or_default());
        out_rows.push(row);
    }

    Table::new(headers, out_rows)
}
