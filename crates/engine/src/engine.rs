use crate::classify::partition;
use crate::config::ReconConfig;
use crate::error::ReconError;
use crate::loader::{load_bank, load_disbursement};
use crate::matcher::outer_join;
use crate::model::{ReconResult, RunMeta};
use crate::summary::compute_summary;
use crate::table::Table;

/// Run reconciliation over two pre-loaded tables. Returns the classified
/// partitions plus summary; fails whole on schema or data errors.
pub fn run(
    bank: &Table,
    disbursement: &Table,
    config: &ReconConfig,
) -> Result<ReconResult, ReconError> {
    let bank_outcome = load_bank(bank, &config.bank)?;
    let disb_outcome = load_disbursement(disbursement, &config.disbursement)?;

    let joined = outer_join(&bank_outcome.records, &disb_outcome.records);
    let parts = partition(joined, &config.tolerance);
    let summary = compute_summary(&bank_outcome, &disb_outcome, &parts);

    let mut warnings = bank_outcome.warnings;
    warnings.extend(disb_outcome.warnings);

    Ok(ReconResult {
        meta: RunMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            date_window_days: config.tolerance.date_window_days,
        },
        summary,
        bank_headers: bank_outcome.headers,
        disbursement_headers: disb_outcome.headers,
        matched: parts.matched,
        unmatched_bank: parts.unmatched_bank,
        unmatched_disbursement: parts.unmatched_disbursement,
        warnings,
    })
}
