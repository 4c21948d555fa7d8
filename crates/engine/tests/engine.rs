// End-to-end engine runs over inline tables: the reference scenarios the
// tool was built around, plus partition invariants.

use drecon_engine::config::{ReconConfig, ToleranceConfig};
use drecon_engine::engine::run;
use drecon_engine::error::ReconError;
use drecon_engine::table::Table;

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

fn bank_table(rows: &[&[&str]]) -> Table {
    table(&["Date", "Description", "Amount"], rows)
}

fn disb_table(rows: &[&[&str]]) -> Table {
    table(
        &["LOAN NUMBER", "TRANSACTION NARRATION", "EFFECTIVE DATE", "AMOUNT DISBURSED"],
        rows,
    )
}

#[test]
fn payment_within_window_matches() {
    // Bank -5000.00 against disbursement +5000.00: both keys are 456-5000.00
    let bank = bank_table(&[&["2024-01-10", "PAYMENT REF 123R456", "-5000.00"]]);
    let disb = disb_table(&[&["456", "LOAN PAYOUT", "2024-01-12", "5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.matched, 1);
    assert_eq!(result.summary.unmatched_bank, 0);
    assert_eq!(result.summary.unmatched_disbursement, 0);

    let row = &result.matched[0];
    assert_eq!(row.key.as_deref(), Some("456-5000.00"));
    assert_eq!(row.date_diff, Some(2));
}

#[test]
fn cash_narration_is_excluded_before_joining() {
    let bank = bank_table(&[]);
    let disb = disb_table(&[&["456", "CASH WITHDRAWAL", "2024-01-12", "5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.disbursement_records, 0);
    assert_eq!(result.summary.joined_rows, 0);
    assert!(result.unmatched_disbursement.is_empty());
}

#[test]
fn description_without_reference_never_matches() {
    let bank = bank_table(&[&["2024-01-10", "TRANSFER NO REFERENCE", "-5000.00"]]);
    let disb = disb_table(&[&["456", "LOAN PAYOUT", "2024-01-12", "5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.matched, 0);
    assert_eq!(result.summary.bank_keyless, 1);
    assert_eq!(result.summary.unmatched_bank, 1);
    assert_eq!(result.summary.unmatched_disbursement, 1);

    let bank_row = &result.unmatched_bank[0];
    assert!(bank_row.key.is_none());
    assert!(bank_row.disbursement.is_none());
}

#[test]
fn wide_date_gap_lands_in_no_partition() {
    // Keys agree but the dates are 19 days apart
    let bank = bank_table(&[&["2024-01-01", "PAYMENT 123R456", "-5000.00"]]);
    let disb = disb_table(&[&["456", "LOAN PAYOUT", "2024-01-20", "5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.out_of_window, 1);
    assert_eq!(result.summary.matched, 0);
    assert!(result.matched.is_empty());
    assert!(result.unmatched_bank.is_empty());
    assert!(result.unmatched_disbursement.is_empty());
}

#[test]
fn disbursement_missing_amount_contributes_nothing() {
    let bank = bank_table(&[]);
    let disb = disb_table(&[
        &["456", "LOAN PAYOUT", "2024-01-12", ""],
        &["789", "LOAN PAYOUT", "2024-01-12", "250.00"],
    ]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.disbursement_rows_read, 2);
    assert_eq!(result.summary.disbursement_records, 1);
    assert_eq!(result.summary.unmatched_disbursement, 1);
    assert_eq!(
        result.unmatched_disbursement[0].key.as_deref(),
        Some("789-250.00")
    );
}

#[test]
fn seven_day_gap_matches_eight_does_not() {
    let bank = bank_table(&[
        &["2024-01-10", "PAYMENT 1R1", "-100.00"],
        &["2024-01-10", "PAYMENT 2R2", "-100.00"],
    ]);
    let disb = disb_table(&[
        &["1", "LOAN PAYOUT", "2024-01-17", "100.00"],
        &["2", "LOAN PAYOUT", "2024-01-18", "100.00"],
    ]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.matched, 1);
    assert_eq!(result.summary.out_of_window, 1);
    assert_eq!(result.matched[0].key.as_deref(), Some("1-100.00"));
    assert_eq!(result.matched[0].date_diff, Some(7));
}

#[test]
fn unparseable_disbursement_date_claims_row_for_bank_output() {
    // Keys pair the records, but the effective date never parses, so the
    // joined row reports as unmatched from the bank side.
    let bank = bank_table(&[&["2024-01-10", "PAYMENT 123R456", "-5000.00"]]);
    let disb = disb_table(&[&["456", "LOAN PAYOUT", "not a date", "5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.matched, 0);
    assert_eq!(result.summary.unmatched_bank, 1);
    assert_eq!(result.summary.unmatched_disbursement, 0);

    let row = &result.unmatched_bank[0];
    assert!(row.bank.is_some() && row.disbursement.is_some());
    assert_eq!(row.date_diff, None);
}

#[test]
fn unparseable_bank_date_claims_row_for_disbursement_output() {
    let bank = bank_table(&[&["pending", "PAYMENT 123R456", "-5000.00"]]);
    let disb = disb_table(&[&["456", "LOAN PAYOUT", "2024-01-12", "5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.unmatched_bank, 0);
    assert_eq!(result.summary.unmatched_disbursement, 1);
}

#[test]
fn duplicate_keys_expand_cartesian() {
    let bank = bank_table(&[
        &["2024-01-10", "PAYMENT 123R456 FIRST", "-5000.00"],
        &["2024-01-11", "PAYMENT 999R456 SECOND", "5000.00"],
    ]);
    let disb = disb_table(&[
        &["456", "LOAN PAYOUT A", "2024-01-12", "5000.00"],
        &["456", "LOAN PAYOUT B", "2024-01-13", "5000.00"],
    ]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.joined_rows, 4);
    assert_eq!(result.summary.matched, 4);
}

#[test]
fn negative_disbursement_key_never_meets_bank_key() {
    // Bank takes the absolute amount, the disbursement side keeps its sign.
    let bank = bank_table(&[&["2024-01-10", "REVERSAL 123R456", "5000.00"]]);
    let disb = disb_table(&[&["456", "REVERSAL", "2024-01-10", "-5000.00"]]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    assert_eq!(result.summary.matched, 0);
    assert_eq!(result.summary.unmatched_bank, 1);
    assert_eq!(result.summary.unmatched_disbursement, 1);
    assert_eq!(
        result.unmatched_disbursement[0].key.as_deref(),
        Some("456--5000.00")
    );
}

#[test]
fn custom_window_changes_partitioning() {
    let config = ReconConfig {
        tolerance: ToleranceConfig {
            date_window_days: 2,
        },
        ..ReconConfig::default()
    };
    let bank = bank_table(&[&["2024-01-10", "PAYMENT 123R456", "-5000.00"]]);
    let disb = disb_table(&[&["456", "LOAN PAYOUT", "2024-01-15", "5000.00"]]);

    let result = run(&bank, &disb, &config).unwrap();
    assert_eq!(result.summary.out_of_window, 1);
    assert_eq!(result.meta.date_window_days, 2);
}

#[test]
fn schema_error_names_the_missing_column() {
    let bank = bank_table(&[]);
    let disb = table(
        &["LOAN NUMBER", "EFFECTIVE DATE", "AMOUNT DISBURSED"],
        &[],
    );

    let err = run(&bank, &disb, &ReconConfig::default()).unwrap_err();
    assert!(err.to_string().contains("TRANSACTION NARRATION"));
    assert!(matches!(err, ReconError::MissingColumn { .. }));
}

#[test]
fn result_serializes_without_absent_fields() {
    let bank = bank_table(&[&["2024-01-10", "NO REFERENCE HERE", ""]]);
    let disb = disb_table(&[]);

    let result = run(&bank, &disb, &ReconConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    let row = &json["unmatched_bank"][0];
    assert!(row.get("key").is_none());
    assert!(row.get("date_diff").is_none());
    assert_eq!(json["summary"]["bank_keyless"], 1);
    assert_eq!(json["meta"]["date_window_days"], 7);
}
