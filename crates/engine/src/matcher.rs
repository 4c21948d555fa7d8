//! Full outer join on the join key.
//!
//! Duplicate keys pair cartesian, keyless rows never pair with each other,
//! and every input record appears at least once. Output order is
//! deterministic: bank rows in input order (with pairings in disbursement
//! input order), then unpaired disbursement rows in input order.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{BankRecord, DisbursementRecord, JoinedRecord};

/// Absolute distance in whole days, when both dates exist.
fn date_diff(bank: Option<NaiveDate>, effective: Option<NaiveDate>) -> Option<i64> {
    match (bank, effective) {
        (Some(b), Some(e)) => Some((b - e).num_days().abs()),
        _ => None,
    }
}

pub fn outer_join(bank: &[BankRecord], disbursement: &[DisbursementRecord]) -> Vec<JoinedRecord> {
    let mut disb_index: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, record) in disbursement.iter().enumerate() {
        disb_index.entry(record.key.as_str()).or_default().push(i);
    }

    let mut disb_paired = vec![false; disbursement.len()];
    let mut joined = Vec::new();

    for bank_record in bank {
        let partners = bank_record
            .key
            .as_deref()
            .and_then(|k| disb_index.get(k));

        match partners {
            Some(indices) => {
                for &di in indices {
                    disb_paired[di] = true;
                    let disb_record = &disbursement[di];
                    joined.push(JoinedRecord {
                        key: bank_record.key.clone(),
                        date_diff: date_diff(bank_record.date, disb_record.effective_date),
                        bank: Some(bank_record.clone()),
                        disbursement: Some(disb_record.clone()),
                    });
                }
            }
            None => {
                joined.push(JoinedRecord {
                    key: bank_record.key.clone(),
                    bank: Some(bank_record.clone()),
                    disbursement: None,
                    date_diff: None,
                });
            }
        }
    }

    for (di, disb_record) in disbursement.iter().enumerate() {
        if !disb_paired[di] {
            joined.push(JoinedRecord {
                key: Some(disb_record.key.clone()),
                bank: None,
                disbursement: Some(disb_record.clone()),
                date_diff: None,
            });
        }
    }

    joined
}
