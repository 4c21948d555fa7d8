//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract - scripts rely on them.
//!
//! | Code | Meaning                                     |
//! |------|---------------------------------------------|
//! | 0    | Success                                     |
//! | 1    | General error (unspecified)                 |
//! | 2    | Usage error (bad args, missing input file)  |
//! | 3    | Schema error (required column missing)      |
//! | 4    | Data error (unparseable loan number/amount) |
//! | 5    | I/O error (file read or write failed)       |
//!
//! Unmatched rows are not an error. Listing them is the tool's output,
//! so a run that finds them still exits 0.

use drecon_engine::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing input file.
pub const EXIT_USAGE: u8 = 2;

/// Schema error - a required column is missing from an input.
pub const EXIT_SCHEMA: u8 = 3;

/// Data error - a loan number or amount failed to parse.
pub const EXIT_DATA: u8 = 4;

/// I/O error - an input could not be read or an output written.
pub const EXIT_IO: u8 = 5;

/// Map an engine error to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::MissingColumn { .. } => EXIT_SCHEMA,
        ReconError::InvalidLoanNumber { .. } | ReconError::InvalidAmount { .. } => EXIT_DATA,
    }
}
