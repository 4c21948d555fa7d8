//! Tolerance partitioning of joined rows.
//!
//! Partition naming follows the output files: `unmatched_bank` holds rows
//! with no usable disbursement date, `unmatched_disbursement` rows with no
//! usable bank date. Rows whose dates are both present but farther apart
//! than the window belong to neither output file; they are bucketed
//! separately so the summary can count them.

use crate::config::ToleranceConfig;
use crate::model::{JoinedRecord, Partitions};

pub fn partition(joined: Vec<JoinedRecord>, tolerance: &ToleranceConfig) -> Partitions {
    let window = i64::from(tolerance.date_window_days);
    let mut parts = Partitions::default();

    for row in joined {
        // Side-only rows go to their own side's partition.
        if row.bank.is_none() {
            parts.unmatched_disbursement.push(row);
            continue;
        }
        if row.disbursement.is_none() {
            parts.unmatched_bank.push(row);
            continue;
        }

        match (row.bank_date(), row.effective_date()) {
            (Some(bank), Some(effective)) => {
                let diff = (bank - effective).num_days().abs();
                if diff <= window {
                    parts.matched.push(row);
                } else {
                    parts.out_of_window.push(row);
                }
            }
            (None, Some(_)) => parts.unmatched_disbursement.push(row),
            // Disbursement date unparseable (or both dates): the bank
            // output claims these rows.
            (Some(_), None) | (None, None) => parts.unmatched_bank.push(row),
        }
    }

    parts
}
