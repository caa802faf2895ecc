use mds_core::{mds_minimize, Bounds, MdsParams};

use crate::rng::TrialRng;
use crate::trial::Trial;

/// The best trial seen by one worker so far, plus how many f-calls it has
/// made. `best = None` is the "no candidate yet" sentinel (spec.md §3's
/// `fx = +∞`, `trial = -1`): an empty shard (`start == end`) never leaves
/// this state.
#[derive(Debug, Clone)]
pub struct WorkerLocalBest {
    pub rank: usize,
    pub best: Option<Trial>,
    pub local_funevals: usize,
}

impl WorkerLocalBest {
    fn empty(rank: usize) -> Self {
        Self {
            rank,
            best: None,
            local_funevals: 0,
        }
    }
}

/// `[start, end)` trial indices assigned to worker `rank` out of `size`
/// workers splitting `ntrials` total trials. The last worker's upper bound
/// is forced to `ntrials` so the shards always cover the full range even
/// when `ntrials` doesn't divide evenly (spec.md §4.D).
pub fn shard_range(rank: usize, size: usize, ntrials: usize) -> (usize, usize) {
    let step = ntrials as f64 / size as f64;
    let start = (rank as f64 * step) as usize;
    let end = if rank + 1 == size {
        ntrials
    } else {
        ((rank + 1) as f64 * step) as usize
    };
    (start, end)
}

/// Runs every trial assigned to worker `rank`, tracking the best result and
/// the total number of f-calls made on this worker.
#[allow(clippy::too_many_arguments)]
pub fn run_worker_shard<F>(
    rank: usize,
    size: usize,
    ntrials: usize,
    tseed: i64,
    bounds: &Bounds,
    params: &MdsParams,
    objective: &F,
) -> WorkerLocalBest
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let (start, end) = shard_range(rank, size, ntrials);
    let mut local = WorkerLocalBest::empty(rank);
    let mut rng = TrialRng::for_worker(tseed, rank, ntrials);

    for trial_index in start..end {
        let startpt = rng.next_point(bounds);
        let outcome = mds_minimize(objective, &startpt, bounds, params);
        local.local_funevals += outcome.evaluations;

        let is_better = match &local.best {
            Some(best) => outcome.fx < best.fx,
            None => true,
        };
        if is_better {
            local.best = Some(Trial {
                index: trial_index as i64,
                iterations: outcome.iterations,
                evaluations: outcome.evaluations,
                endpoint: outcome.endpoint,
                fx: outcome.fx,
                term: outcome.term,
            });
        }
    }

    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use mds_testfunctions::rosenbrock;

    #[test]
    fn shard_range_covers_all_trials_without_overlap() {
        let size = 4;
        let ntrials = 64;
        let mut covered = vec![false; ntrials];
        for rank in 0..size {
            let (s, e) = shard_range(rank, size, ntrials);
            for t in s..e {
                assert!(!covered[t], "trial {} covered twice", t);
                covered[t] = true;
            }
        }
        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn last_worker_absorbs_uneven_remainder() {
        let (_, end) = shard_range(2, 3, 10);
        assert_eq!(end, 10);
    }

    #[test]
    fn empty_shard_stays_at_sentinel() {
        let bounds = mds_core::Bounds::symmetric(4, 2.0);
        let params = MdsParams::default();
        // rank 5 of size 4 is out of range, producing an empty shard.
        let local = run_worker_shard(5, 4, 0, 1, &bounds, &params, &rosenbrock);
        assert!(local.best.is_none());
        assert_eq!(local.local_funevals, 0);
    }

    #[test]
    fn worker_tracks_the_best_of_its_trials() {
        let bounds = mds_core::Bounds::symmetric(4, 2.0);
        let params = MdsParams::default();
        let local = run_worker_shard(0, 1, 4, 1, &bounds, &params, &rosenbrock);
        let best = local.best.expect("non-empty shard has a best trial");
        assert!(best.fx >= 0.0);
        assert!(local.local_funevals > 0);
    }
}
