use std::fmt;

use crate::model::Source;

#[derive(Debug)]
pub enum ReconError {
    /// Required column absent from an input table. Fatal: no partial output.
    MissingColumn { source: Source, column: String },
    /// Non-empty loan number cell that does not parse as a number.
    InvalidLoanNumber { row: usize, value: String },
    /// Non-empty amount cell that does not parse as a number.
    InvalidAmount { source: Source, row: usize, value: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { source, column } => {
                write!(f, "{source} input: missing required column '{column}'")
            }
            Self::InvalidLoanNumber { row, value } => {
                write!(f, "disbursement row {row}: cannot parse loan number '{value}'")
            }
            Self::InvalidAmount { source, row, value } => {
                write!(f, "{source} row {row}: cannot parse amount '{value}'")
            }
        }
    }
}

impl std::error::Error for ReconError {}
