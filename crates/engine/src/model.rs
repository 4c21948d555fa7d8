use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Bank,
    Disbursement,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bank => write!(f, "bank"),
            Self::Disbursement => write!(f, "disbursement"),
        }
    }
}

// ---------------------------------------------------------------------------
// Cleaned records
// ---------------------------------------------------------------------------

/// A cleaned bank statement row. Any of the derived fields may be absent;
/// a record without a key passes through the join unpaired.
#[derive(Debug, Clone, Serialize)]
pub struct BankRecord {
    /// 1-based data row in the source table, counted below the header.
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Original cells, aligned with the source header order.
    pub raw: Vec<String>,
}

/// A cleaned disbursement report row. Loan number and amount are required
/// by the cleaning rules, so the key is always present.
#[derive(Debug, Clone, Serialize)]
pub struct DisbursementRecord {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    pub loan_number: i64,
    pub amount_disbursed: f64,
    pub key: String,
    pub raw: Vec<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Row-local diagnostics, returned as data rather than logged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Warning {
    /// Reference token without an 'R'; the record was excluded from joining.
    MalformedReference {
        source: Source,
        row: usize,
        token: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedReference { source, row, token } => {
                write!(f, "{source} row {row}: unexpected reference format '{token}'")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LoadStats {
    pub rows_read: usize,
    /// Rows removed by the narration/description exclusion filter.
    pub rows_excluded: usize,
    /// Rows dropped for a missing required field.
    pub rows_dropped: usize,
    /// Cleaned records left without a join key.
    pub keyless: usize,
}

/// One source's cleaning output: records plus everything the cleaning
/// observed along the way.
#[derive(Debug)]
pub struct LoadOutcome<T> {
    pub headers: Vec<String>,
    pub records: Vec<T>,
    pub stats: LoadStats,
    pub warnings: Vec<Warning>,
}

// ---------------------------------------------------------------------------
// Joining
// ---------------------------------------------------------------------------

/// One row of the outer join: at most one record from each side sharing a
/// join key, plus the date distance between them when both dates exist.
#[derive(Debug, Clone, Serialize)]
pub struct JoinedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disbursement: Option<DisbursementRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_diff: Option<i64>,
}

impl JoinedRecord {
    pub fn bank_date(&self) -> Option<NaiveDate> {
        self.bank.as_ref().and_then(|b| b.date)
    }

    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.disbursement.as_ref().and_then(|d| d.effective_date)
    }
}

/// Output of classification. Out-of-window rows are held separately:
/// neither output file claims them and they surface only as a summary count.
#[derive(Debug, Default)]
pub struct Partitions {
    pub matched: Vec<JoinedRecord>,
    pub unmatched_bank: Vec<JoinedRecord>,
    pub unmatched_disbursement: Vec<JoinedRecord>,
    pub out_of_window: Vec<JoinedRecord>,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub bank_rows_read: usize,
    pub bank_records: usize,
    pub disbursement_rows_read: usize,
    pub disbursement_records: usize,
    pub joined_rows: usize,
    pub matched: usize,
    pub unmatched_bank: usize,
    pub unmatched_disbursement: usize,
    pub out_of_window: usize,
    pub bank_keyless: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub engine_version: String,
    pub run_at: String,
    pub date_window_days: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconResult {
    pub meta: RunMeta,
    pub summary: ReconSummary,
    pub bank_headers: Vec<String>,
    pub disbursement_headers: Vec<String>,
    pub matched: Vec<JoinedRecord>,
    pub unmatched_bank: Vec<JoinedRecord>,
    pub unmatched_disbursement: Vec<JoinedRecord>,
    pub warnings: Vec<Warning>,
}
