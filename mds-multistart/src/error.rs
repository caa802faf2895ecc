//! Error taxonomy for the multistart driver (spec.md §7).
//!
//! `BudgetExhausted` is deliberately absent: an MDS run that exhausts its
//! evaluation or iteration budget still returns normally with a term code
//! (`mds_core::TermCode::EvalBudget` / `IterBudget`) and is still a valid
//! trial record, never an error.

use std::path::PathBuf;

/// Invalid configuration, caught at driver entry before any worker runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("nvars must be in 1..={max} (got {got})", max = mds_core::MAXVARS)]
    InvalidNvars { got: i64 },

    #[error("ntrials must be positive (got {0})")]
    InvalidNtrials(i64),

    #[error("bound {j}: lower ({lo}) must be strictly less than upper ({hi})")]
    InvalidBounds { j: usize, lo: f64, hi: f64 },

    #[error("{name} must be positive (got {value})")]
    NonPositiveParam { name: &'static str, value: f64 },
}

/// The reduction transport or aggregation step failed. Fatal: the
/// coordinator exits nonzero and emits no report at all.
#[derive(Debug, thiserror::Error)]
pub enum ReductionError {
    #[error("worker {rank} panicked before returning a result")]
    WorkerPanicked { rank: usize },
}

/// The finished report could not be written to its sink. All computation
/// has already completed; this only affects persistence.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
