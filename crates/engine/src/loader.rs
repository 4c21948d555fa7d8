//! Source-specific cleaning: schema validation, exclusion filters, field
//! typing, and key attachment.
//!
//! Schema problems and unparseable numerics are fatal for the run. Dates
//! that fail to parse coerce to absent and the row keeps going; what that
//! absence means is decided later, in classification.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::{BankColumns, DisbursementColumns};
use crate::error::ReconError;
use crate::key::{self, KeyOutcome};
use crate::model::{BankRecord, DisbursementRecord, LoadOutcome, LoadStats, Source, Warning};
use crate::reference::extract_reference;
use crate::table::Table;

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%b-%Y", "%d %b %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Lenient date parse over the formats the source files actually carry.
/// Anything unrecognized coerces to `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Financial number parse: tolerates currency symbols, thousands commas,
/// surrounding whitespace, and parenthesized negatives.
pub fn parse_amount(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Parenthesized negatives: (123.45) means -123.45
    let (is_negative, inner) = if trimmed.starts_with('(') && trimmed.ends_with(')') {
        (true, &trimmed[1..trimmed.len() - 1])
    } else {
        (false, trimmed)
    };

    let cleaned: String = inner
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    // Only digits, '.', and a leading sign may remain
    for (i, c) in cleaned.chars().enumerate() {
        match c {
            '0'..='9' | '.' => {}
            '-' | '+' if i == 0 && !is_negative => {}
            _ => return None,
        }
    }

    let value: f64 = cleaned.parse().ok()?;
    Some(if is_negative { -value } else { value })
}

/// Loan number parse: integral value, tolerating the `.0` tail a numeric
/// export produces. Truncates toward zero like an integer cast.
fn parse_loan_number(s: &str) -> Option<i64> {
    let cleaned: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if let Ok(n) = cleaned.parse::<i64>() {
        return Some(n);
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Narration exclusion: internal cash movements and the literal placeholder
/// text "nan", case-insensitive. An empty narration is kept — absence is
/// not containment.
fn narration_excluded(narration: &str) -> bool {
    let lower = narration.to_lowercase();
    lower.contains("cash") || lower.contains("nan")
}

// ---------------------------------------------------------------------------
// Disbursement report
// ---------------------------------------------------------------------------

pub fn load_disbursement(
    table: &Table,
    columns: &DisbursementColumns,
) -> Result<LoadOutcome<DisbursementRecord>, ReconError> {
    let idx = |name: &str| -> Result<usize, ReconError> {
        table.column(name).ok_or_else(|| ReconError::MissingColumn {
            source: Source::Disbursement,
            column: name.into(),
        })
    };

    let narration_idx = idx(&columns.narration)?;
    let effective_idx = idx(&columns.effective_date)?;
    let loan_idx = idx(&columns.loan_number)?;
    let amount_idx = idx(&columns.amount_disbursed)?;

    let mut stats = LoadStats {
        rows_read: table.rows.len(),
        ..LoadStats::default()
    };
    let mut records = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let row_no = i + 1;

        if narration_excluded(table.cell(row, narration_idx)) {
            stats.rows_excluded += 1;
            continue;
        }

        let loan_raw = table.cell(row, loan_idx).trim();
        let amount_raw = table.cell(row, amount_idx).trim();
        if loan_raw.is_empty() || amount_raw.is_empty() {
            stats.rows_dropped += 1;
            continue;
        }

        let loan_number =
            parse_loan_number(loan_raw).ok_or_else(|| ReconError::InvalidLoanNumber {
                row: row_no,
                value: loan_raw.into(),
            })?;
        let amount_disbursed = parse_amount(amount_raw).ok_or_else(|| ReconError::InvalidAmount {
            source: Source::Disbursement,
            row: row_no,
            value: amount_raw.into(),
        })?;

        let effective_date = parse_date(table.cell(row, effective_idx));
        let key = key::disbursement_join_key(loan_number, amount_disbursed);

        records.push(DisbursementRecord {
            row: row_no,
            effective_date,
            loan_number,
            amount_disbursed,
            key,
            raw: row.clone(),
        });
    }

    Ok(LoadOutcome {
        headers: table.headers.clone(),
        records,
        stats,
        warnings: Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Bank statement
// ---------------------------------------------------------------------------

pub fn load_bank(
    table: &Table,
    columns: &BankColumns,
) -> Result<LoadOutcome<BankRecord>, ReconError> {
    let idx = |name: &str| -> Result<usize, ReconError> {
        table.column(name).ok_or_else(|| ReconError::MissingColumn {
            source: Source::Bank,
            column: name.into(),
        })
    };

    let description_idx = idx(&columns.description)?;
    let date_idx = idx(&columns.date)?;
    let amount_idx = idx(&columns.amount)?;

    let mut stats = LoadStats {
        rows_read: table.rows.len(),
        ..LoadStats::default()
    };
    let mut warnings = Vec::new();
    let mut records = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let row_no = i + 1;

        let description = table.cell(row, description_idx);
        if description.to_lowercase().contains("debit transferst-") {
            stats.rows_excluded += 1;
            continue;
        }

        let date = parse_date(table.cell(row, date_idx));

        let amount_raw = table.cell(row, amount_idx).trim();
        let amount = if amount_raw.is_empty() {
            None
        } else {
            Some(parse_amount(amount_raw).ok_or_else(|| ReconError::InvalidAmount {
                source: Source::Bank,
                row: row_no,
                value: amount_raw.into(),
            })?)
        };

        let reference = extract_reference(description);
        let key = match key::bank_join_key(reference.as_deref(), amount) {
            KeyOutcome::Key(k) => Some(k),
            KeyOutcome::MalformedReference(token) => {
                warnings.push(Warning::MalformedReference {
                    source: Source::Bank,
                    row: row_no,
                    token,
                });
                None
            }
            KeyOutcome::Absent => None,
        };
        if key.is_none() {
            stats.keyless += 1;
        }

        records.push(BankRecord {
            row: row_no,
            date,
            amount,
            reference,
            key,
            raw: row.clone(),
        });
    }

    Ok(LoadOutcome {
        headers: table.headers.clone(),
        records,
        stats,
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
