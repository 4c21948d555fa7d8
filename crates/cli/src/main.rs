// drecon - reconcile a bank statement against a disbursement report

mod exit_codes;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use exit_codes::{EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "drecon")]
#[command(about = "Reconcile a bank statement against a disbursement report")]
#[command(version)]
#[command(after_help = "\
Rows pair on a join key built from the loan reference in the bank narration
and the transaction amount, then count as matched when their dates are at
most 7 days apart. Each side's unmatched rows are written as a timestamped
file in the output directory.

Examples:
  drecon --bank statement.xlsx --disbursement report.xlsx
  drecon --bank statement.csv --disbursement report.xlsx --output runs/
  drecon --bank statement.xlsx --disbursement report.xlsx --format csv
  drecon --bank statement.xlsx --disbursement report.xlsx --json | jq .summary")]
struct Cli {
    /// Bank statement file (xlsx, xls, or csv)
    #[arg(long, value_name = "FILE")]
    bank: PathBuf,

    /// Disbursement report file (xlsx, xls, or csv)
    #[arg(long, value_name = "FILE")]
    disbursement: PathBuf,

    /// Directory for the unmatched output files
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
    format: OutputFormat,

    /// Print the full result as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Quiet mode - suppress the stderr summary and preview
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run::cmd_run(
        cli.bank,
        cli.disbursement,
        cli.output,
        cli.format,
        cli.json,
        cli.quiet,
    );

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
