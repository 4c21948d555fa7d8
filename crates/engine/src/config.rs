//! Engine configuration: date-tolerance policy and source schemas.
//!
//! Both input formats are fixed, so the schemas ship as `Default` impls
//! rather than a config file layer.

// ---------------------------------------------------------------------------
// Tolerance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ToleranceConfig {
    /// Max whole days between bank date and effective date, inclusive.
    pub date_window_days: u32,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self { date_window_days: 7 }
    }
}

// ---------------------------------------------------------------------------
// Source schemas
// ---------------------------------------------------------------------------

/// Required bank statement columns and header placement.
#[derive(Debug, Clone)]
pub struct BankColumns {
    pub description: String,
    pub date: String,
    pub amount: String,
    /// Rows above the header row in the source file.
    pub header_offset: usize,
}

impl Default for BankColumns {
    fn default() -> Self {
        Self {
            description: "Description".into(),
            date: "Date".into(),
            amount: "Amount".into(),
            header_offset: 0,
        }
    }
}

/// Required disbursement report columns and header placement.
#[derive(Debug, Clone)]
pub struct DisbursementColumns {
    pub narration: String,
    pub effective_date: String,
    pub loan_number: String,
    pub amount_disbursed: String,
    /// The report carries six banner rows above its header.
    pub header_offset: usize,
}

impl Default for DisbursementColumns {
    fn default() -> Self {
        Self {
            narration: "TRANSACTION NARRATION".into(),
            effective_date: "EFFECTIVE DATE".into(),
            loan_number: "LOAN NUMBER".into(),
            amount_disbursed: "AMOUNT DISBURSED".into(),
            header_offset: 6,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ReconConfig {
    pub bank: BankColumns,
    pub disbursement: DisbursementColumns,
    pub tolerance: ToleranceConfig,
}
