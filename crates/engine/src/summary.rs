//! Run summary tallies.

use crate::model::{BankRecord, DisbursementRecord, LoadOutcome, Partitions, ReconSummary};

pub fn compute_summary(
    bank: &LoadOutcome<BankRecord>,
    disbursement: &LoadOutcome<DisbursementRecord>,
    partitions: &Partitions,
) -> ReconSummary {
    let joined_rows = partitions.matched.len()
        + partitions.unmatched_bank.len()
        + partitions.unmatched_disbursement.len()
        + partitions.out_of_window.len();

    ReconSummary {
        bank_rows_read: bank.stats.rows_read,
        bank_records: bank.records.len(),
        disbursement_rows_read: disbursement.stats.rows_read,
        disbursement_records: disbursement.records.len(),
        joined_rows,
        matched: partitions.matched.len(),
        unmatched_bank: partitions.unmatched_bank.len(),
        unmatched_disbursement: partitions.unmatched_disbursement.len(),
        out_of_window: partitions.out_of_window.len(),
        bank_keyless: bank.stats.keyless,
        warnings: bank.warnings.len() + disbursement.warnings.len(),
    }
}
