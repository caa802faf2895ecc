//! Orchestrates one multistart run: spawns one thread per worker, waits for
//! all of them, and reduces their results (spec.md §4.D-F).
//!
//! The reference implementation is an MPI program: each rank is a separate
//! process, and the final `MPI_Reduce` is a network collective. Here the
//! "ranks" are threads in one process and the collective is just the
//! `Vec<WorkerLocalBest>` `std::thread::scope` hands back once every
//! spawned thread has joined — no process boundary, no serialization, but
//! the same shared-nothing-until-the-end shape.

use std::time::Instant;

use crate::config::MultistartConfig;
use crate::error::ReductionError;
use crate::reduce::{self, GlobalBest};
use crate::report::Report;
use crate::worker::{run_worker_shard, WorkerLocalBest};

pub struct RunResult {
    pub report: Report,
    pub global: GlobalBest,
}

/// Runs `config.workers` worker threads over `config.ntrials` trials of
/// `objective` and reduces their results into a [`Report`].
pub fn run<F>(config: &MultistartConfig, objective: &F) -> Result<RunResult, ReductionError>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let started = Instant::now();

    let locals: Vec<WorkerLocalBest> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..config.workers)
            .map(|rank| {
                scope.spawn(move || {
                    run_worker_shard(
                        rank,
                        config.workers,
                        config.ntrials,
                        config.tseed,
                        &config.bounds,
                        &config.mds_params,
                        objective,
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(rank, handle)| handle.join().map_err(|_| ReductionError::WorkerPanicked { rank }))
            .collect::<Result<Vec<_>, _>>()
    })?;

    let global = reduce::reduce(&locals);
    let elapsed_seconds = started.elapsed().as_secs_f64();
    let report = Report::new(elapsed_seconds, config.ntrials, &global);

    Ok(RunResult { report, global })
}
