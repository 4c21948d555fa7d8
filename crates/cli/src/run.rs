//! The reconciliation pipeline: read inputs, run the engine, write the
//! unmatched files, report on stderr.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use drecon_engine::model::{JoinedRecord, Source};
use drecon_engine::output;
use drecon_engine::{ReconConfig, ReconError, ReconResult, Table};

use crate::exit_codes::{recon_exit_code, EXIT_ERROR};
use crate::{CliError, OutputFormat};

/// Matched rows shown on stderr after a run.
const MATCHED_PREVIEW_ROWS: usize = 5;

pub fn cmd_run(
    bank: PathBuf,
    disbursement: PathBuf,
    output_dir: PathBuf,
    format: OutputFormat,
    json_output: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = ReconConfig::default();

    let bank_table = read_input(&bank, config.bank.header_offset)?;
    let disbursement_table = read_input(&disbursement, config.disbursement.header_offset)?;

    let result =
        drecon_engine::run(&bank_table, &disbursement_table, &config).map_err(recon_error)?;

    // Both files are written on every run, empty or not; the pair is the
    // contract operators script against.
    let stamp = Local::now().format("%Y%m%d%H%M");
    let ext = format.extension();
    let bank_out = output_dir.join(format!("Unmatched_Bank_{stamp}.{ext}"));
    let disbursement_out = output_dir.join(format!("Unmatched_Disbursement_{stamp}.{ext}"));

    write_joined(&result.unmatched_bank, &result, &bank_out)?;
    write_joined(&result.unmatched_disbursement, &result, &disbursement_out)?;

    if json_output {
        let json_str = serde_json::to_string_pretty(&result).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{json_str}");
    }

    if !quiet {
        print_report(&result, &bank_out, &disbursement_out);
    }

    Ok(())
}

fn read_input(path: &Path, header_offset: usize) -> Result<Table, CliError> {
    if !path.exists() {
        return Err(CliError::args(format!("File not found: {}", path.display())));
    }
    drecon_io::read_table(path, header_offset)
        .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))
}

fn write_joined(rows: &[JoinedRecord], result: &ReconResult, path: &Path) -> Result<(), CliError> {
    let table = output::joined_table(rows, &result.bank_headers, &result.disbursement_headers);
    drecon_io::write_table(&table, path).map_err(|e| {
        CliError::io(format!("cannot write {}: {}", path.display(), e))
            .with_hint("does the output directory exist?")
    })
}

fn recon_error(err: ReconError) -> CliError {
    let hint = match &err {
        ReconError::MissingColumn {
            source: Source::Disbursement,
            ..
        } => Some(
            "disbursement reports carry six preamble rows above the header; check the file shape"
                .to_string(),
        ),
        _ => None,
    };
    CliError {
        code: recon_exit_code(&err),
        message: err.to_string(),
        hint,
    }
}

fn print_report(result: &ReconResult, bank_out: &Path, disbursement_out: &Path) {
    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    let s = &result.summary;
    eprintln!(
        "reconciled {} bank x {} disbursement records: {} matched, {} unmatched bank, {} unmatched disbursement, {} outside window",
        s.bank_records,
        s.disbursement_records,
        s.matched,
        s.unmatched_bank,
        s.unmatched_disbursement,
        s.out_of_window,
    );

    for rec in result.matched.iter().take(MATCHED_PREVIEW_ROWS) {
        eprintln!(
            "  {}  bank {}  disbursement {}  diff {}d",
            rec.key.as_deref().unwrap_or("-"),
            fmt_date(rec.bank_date()),
            fmt_date(rec.effective_date()),
            rec.date_diff.unwrap_or(0),
        );
    }
    if result.matched.len() > MATCHED_PREVIEW_ROWS {
        eprintln!(
            "  ... {} more matched",
            result.matched.len() - MATCHED_PREVIEW_ROWS
        );
    }

    eprintln!("wrote {}", bank_out.display());
    eprintln!("wrote {}", disbursement_out.display());
}

fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}
