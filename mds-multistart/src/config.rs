//! Run configuration and its validation (spec.md §3, §7).

use mds_core::{Bounds, MdsParams, MAXVARS};
use ndarray::Array1;

use crate::error::ConfigError;

/// Everything one multistart run needs, already validated.
#[derive(Debug, Clone)]
pub struct MultistartConfig {
    pub nvars: usize,
    pub ntrials: usize,
    pub workers: usize,
    pub tseed: i64,
    pub bounds: Bounds,
    pub mds_params: MdsParams,
}

impl MultistartConfig {
    /// Builds the symmetric `[-2, 2]` default bounds used by the reference
    /// driver and validates every field, returning the first violation
    /// found.
    pub fn new(
        nvars: i64,
        ntrials: i64,
        workers: usize,
        tseed: i64,
        maxfevals: i64,
        maxiter: i64,
    ) -> Result<Self, ConfigError> {
        if nvars < 1 || nvars as usize > MAXVARS {
            return Err(ConfigError::InvalidNvars { got: nvars });
        }
        if ntrials < 1 {
            return Err(ConfigError::InvalidNtrials(ntrials));
        }
        check_positive("maxfevals", maxfevals as f64)?;
        check_positive("maxiter", maxiter as f64)?;

        let n = nvars as usize;
        let half = 2.0;
        let bounds = Bounds::symmetric(n, half);
        validate_bounds(&bounds)?;

        let mds_params = MdsParams {
            maxfevals: maxfevals as usize,
            maxiter: maxiter as usize,
            ..MdsParams::default()
        };
        validate_mds_params(&mds_params)?;

        Ok(Self {
            nvars: n,
            ntrials: ntrials as usize,
            workers,
            tseed,
            bounds,
            mds_params,
        })
    }

    /// Builds a config around caller-supplied bounds instead of the default
    /// symmetric box (used by tests and library callers; the CLI always
    /// goes through [`MultistartConfig::new`]).
    pub fn with_bounds(mut self, bounds: Bounds) -> Result<Self, ConfigError> {
        validate_bounds(&bounds)?;
        self.bounds = bounds;
        Ok(self)
    }

    /// Swaps in caller-supplied MDS tuning parameters (the CLI never
    /// exposes `mu`/`theta`/`delta`, but a library user can), re-running
    /// the same `ConfigError::NonPositiveParam` validation `new` applies to
    /// its own defaults.
    pub fn with_mds_params(mut self, mds_params: MdsParams) -> Result<Self, ConfigError> {
        validate_mds_params(&mds_params)?;
        self.mds_params = mds_params;
        Ok(self)
    }
}

fn validate_bounds(bounds: &Bounds) -> Result<(), ConfigError> {
    for (j, (&lo, &hi)) in bounds.lo().iter().zip(bounds.hi().iter()).enumerate() {
        if !(lo < hi) {
            return Err(ConfigError::InvalidBounds { j, lo, hi });
        }
    }
    Ok(())
}

/// Validates `mu`/`theta`/`delta`, the "non-positive δ/θ/μ" item in
/// spec.md §7's `ConfigError` taxonomy. `maxfevals`/`maxiter` are checked
/// separately in `new` before they're known to be valid `usize`s.
fn validate_mds_params(params: &MdsParams) -> Result<(), ConfigError> {
    check_positive("mu", params.mu)?;
    check_positive("theta", params.theta)?;
    check_positive("delta", params.delta)?;
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NonPositiveParam { name, value });
    }
    Ok(())
}

#[allow(dead_code)]
fn custom_bounds(lo: Vec<f64>, hi: Vec<f64>) -> Bounds {
    Bounds::new(Array1::from_vec(lo), Array1::from_vec(hi))
}
