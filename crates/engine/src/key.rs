//! Join key construction.
//!
//! Both sides converge on the shape `<loan digits>-<amount to two decimals>`
//! through different routes: the bank side from an extracted reference token,
//! the disbursement side from structured columns. The two formulas disagree
//! on amount sign on purpose; see `bank_join_key` and `disbursement_join_key`.

/// Result of building a bank-side key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Key(String),
    /// Token lacked an 'R'; caller records a warning and the row joins nothing.
    MalformedReference(String),
    /// Reference or amount missing; the row joins nothing, silently.
    Absent,
}

/// Bank-side key: digits after the token's last 'R', then the absolute
/// amount to two decimals. Sign is discarded so debits meet credits.
pub fn bank_join_key(reference: Option<&str>, amount: Option<f64>) -> KeyOutcome {
    let (reference, amount) = match (reference, amount) {
        (Some(r), Some(a)) => (r, a),
        _ => return KeyOutcome::Absent,
    };

    let token = reference.to_uppercase();
    match token.rfind('R') {
        Some(pos) => {
            let digits = &token[pos + 1..];
            KeyOutcome::Key(format!("{digits}-{:.2}", amount.abs()))
        }
        None => KeyOutcome::MalformedReference(token),
    }
}

/// Disbursement-side key: integer loan number, then the amount to two
/// decimals with its sign kept. Do not normalize the sign to match
/// `bank_join_key`: negative disbursements (reversals) must produce keys
/// no bank record can reach.
pub fn disbursement_join_key(loan_number: i64, amount_disbursed: f64) -> String {
    format!("{loan_number}-{amount_disbursed:.2}")
}
