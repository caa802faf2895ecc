//! Final report: the human-readable summary plus the JSON sink the original
//! driver's `write_results_to_json` produced (spec.md §4.F).

use std::path::Path;

use serde::Serialize;

use crate::error::OutputError;
use crate::reduce::GlobalBest;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub elapsed_seconds: f64,
    pub ntrials: usize,
    pub funevals: usize,
    pub best_trial: i64,
    pub best_iterations: usize,
    pub best_nfev: usize,
    pub best_point: Vec<f64>,
    pub best_fx: f64,
    pub best_term: i32,
}

impl Report {
    /// `global.best` is `None` only when `ntrials == 0`, which
    /// `MultistartConfig` already rejects; callers past that validation
    /// boundary can always unwrap it.
    pub fn new(elapsed_seconds: f64, ntrials: usize, global: &GlobalBest) -> Self {
        let best = global
            .best
            .as_ref()
            .expect("reduce() over a nonempty trial set always yields a best trial");
        Self {
            elapsed_seconds,
            ntrials,
            funevals: global.total_funevals,
            best_trial: best.index,
            best_iterations: best.iterations,
            best_nfev: best.evaluations,
            best_point: best.endpoint.clone(),
            best_fx: best.fx,
            best_term: best.term.code(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), OutputError> {
        let body = serde_json::to_string_pretty(self)?;
        std::fs::write(path, body).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
