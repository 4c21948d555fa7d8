//! Bank/disbursement reconciliation engine.
//!
//! Pure engine crate: receives in-memory tables, returns classified results.
//! No CLI or file IO dependencies. Diagnostics are returned as data in the
//! result, never logged.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod output;
pub mod reference;
pub mod summary;
pub mod table;

pub use config::ReconConfig;
pub use engine::run;
pub use error::ReconError;
pub use model::{ReconResult, Warning};
pub use table::Table;
