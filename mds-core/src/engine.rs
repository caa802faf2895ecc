use crate::bounds::Bounds;
use crate::simplex::Simplex;

/// How one MDS invocation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCode {
    /// `nf > maxfevals` — evaluation budget exhausted.
    EvalBudget,
    /// `size(S) < eps` — the simplex collapsed. This is the convergence
    /// success mode.
    Converged,
    /// `iter == maxiter` — iteration budget exhausted.
    IterBudget,
}

impl TermCode {
    /// The numeric term code from the original MDS routine's `*term` output.
    pub fn code(self) -> i32 {
        match self {
            TermCode::EvalBudget => 1,
            TermCode::Converged => 2,
            TermCode::IterBudget => 3,
        }
    }
}

/// MDS tuning parameters. Defaults match the reference multistart driver.
#[derive(Debug, Clone, Copy)]
pub struct MdsParams {
    pub eps: f64,
    pub maxfevals: usize,
    pub maxiter: usize,
    pub mu: f64,
    pub theta: f64,
    pub delta: f64,
}

impl Default for MdsParams {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            maxfevals: 10_000,
            maxiter: 10_000,
            mu: 1.0,
            theta: 0.25,
            delta: 0.25,
        }
    }
}

/// Result of one MDS local search.
#[derive(Debug, Clone)]
pub struct MdsOutcome {
    pub endpoint: Vec<f64>,
    pub fx: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub term: TermCode,
}

/// Evaluates `f` at vertices `1..=n` of `candidate`, leaving vertex 0's
/// value as whatever the caller already set there (the pivot mirror
/// invariant from spec.md §3). Returns the number of new evaluations (`n`).
fn evaluate_batch<F>(candidate: &mut Simplex, f: &F) -> usize
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let n = candidate.dim();
    let rows: Vec<Vec<f64>> = (1..=n).map(|i| candidate.vertex(i).to_vec()).collect();

    #[cfg(feature = "parallel-eval")]
    let values: Vec<f64> = {
        use rayon::prelude::*;
        rows.par_iter().map(|row| f(row)).collect()
    };
    #[cfg(not(feature = "parallel-eval"))]
    let values: Vec<f64> = rows.iter().map(|row| f(row)).collect();

    for (offset, v) in values.into_iter().enumerate() {
        candidate.set_value(offset + 1, v);
    }
    n
}

/// Runs one MDS local search from `start` within `bounds`, minimizing `f`.
///
/// One outer iteration: reflect, then either expand (if reflection improved
/// on the pivot) or contract (otherwise); contraction is always accepted,
/// even when it does not improve on the pivot. See spec.md §4.B for the
/// full step-by-step description and §9 for why the inner loop only ever
/// runs once per outer iteration.
pub fn mds_minimize<F>(f: &F, start: &[f64], bounds: &Bounds, params: &MdsParams) -> MdsOutcome
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    mds_minimize_traced(f, start, bounds, params, None)
}

/// Same algorithm as [`mds_minimize`], with an optional sink that records
/// `(u.size(), took_contraction)` once per outer iteration. The extra
/// parameter only exists to let tests observe the simplex-size trajectory
/// and which moves were contractions, without duplicating the stepping
/// logic; `mds_minimize` itself always passes `None`.
fn mds_minimize_traced<F>(
    f: &F,
    start: &[f64],
    bounds: &Bounds,
    params: &MdsParams,
    mut trace: Option<&mut Vec<(f64, bool)>>,
) -> MdsOutcome
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let n = start.len();
    let mut u = Simplex::initialize(start, params.delta);

    let mut nf = 0usize;
    for i in 0..=n {
        let v = f(&u.vertex(i).to_vec());
        u.set_value(i, v);
        nf += 1;
    }

    let k = u.argmin();
    u.swap(k, 0);

    let mut term = TermCode::IterBudget;
    let mut iter = 0usize;

    'outer: while iter < params.maxiter {
        let k = u.argmin();
        u.swap(k, 0);

        if nf > params.maxfevals {
            term = TermCode::EvalBudget;
            break 'outer;
        }
        let current_size = u.size();
        if current_size < params.eps {
            term = TermCode::Converged;
            break 'outer;
        }

        let pivot = u.vertex(0).to_vec();
        let mut r = Simplex::scratch(n);
        r.set_vertex(0, &pivot);
        r.set_value(0, u.value(0));
        for i in 1..=n {
            let refl: Vec<f64> = u
                .vertex(i)
                .iter()
                .zip(pivot.iter())
                .map(|(&ui, &p0)| 2.0 * p0 - ui)
                .collect();
            r.set_vertex(i, &refl);
        }

        let reflection_in_bounds = r.in_bounds(bounds);
        let mut reflection_succeeded = false;
        let mut k_r = 0usize;
        if reflection_in_bounds {
            nf += evaluate_batch(&mut r, f);
            k_r = r.argmin();
            reflection_succeeded = r.value(k_r) < u.value(0);
        }

        if reflection_succeeded {
            let mut e = Simplex::scratch(n);
            e.set_vertex(0, &pivot);
            e.set_value(0, u.value(0));
            for i in 1..=n {
                let exp: Vec<f64> = u
                    .vertex(i)
                    .iter()
                    .zip(pivot.iter())
                    .map(|(&ui, &p0)| p0 - params.mu * (ui - p0))
                    .collect();
                e.set_vertex(i, &exp);
            }

            if e.in_bounds(bounds) {
                nf += evaluate_batch(&mut e, f);
                let k_e = e.argmin();
                if e.value(k_e) < r.value(k_r) {
                    u.assign_from(&e);
                } else {
                    u.assign_from(&r);
                }
            } else {
                u.assign_from(&r);
            }
        } else {
            let mut c = Simplex::scratch(n);
            c.set_vertex(0, &pivot);
            c.set_value(0, u.value(0));
            for i in 1..=n {
                let con: Vec<f64> = u
                    .vertex(i)
                    .iter()
                    .zip(pivot.iter())
                    .map(|(&ui, &p0)| p0 + params.theta * (ui - p0))
                    .collect();
                c.set_vertex(i, &con);
            }
            nf += evaluate_batch(&mut c, f);
            u.assign_from(&c);
        }

        if let Some(t) = trace.as_deref_mut() {
            t.push((current_size, !reflection_succeeded));
        }

        iter += 1;
        if iter == params.maxiter {
            term = TermCode::IterBudget;
        }
    }

    let k = u.argmin();
    u.swap(k, 0);

    MdsOutcome {
        endpoint: u.vertex(0).to_vec(),
        fx: u.value(0),
        iterations: iter,
        evaluations: nf,
        term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|&v| v * v).sum()
    }

    #[test]
    fn converges_from_already_optimal_start() {
        let bounds = Bounds::symmetric(2, 2.0);
        let params = MdsParams {
            delta: 0.25,
            ..Default::default()
        };
        let outcome = mds_minimize(&sphere, &[0.0, 0.0], &bounds, &params);
        assert_eq!(outcome.term, TermCode::Converged);
        assert!(outcome.iterations <= 30);
        assert!(outcome.fx < 1e-12);
    }

    #[test]
    fn degenerate_bounds_collapse_on_first_check() {
        // A simplex initialized with an edge length smaller than eps is
        // already collapsed before any move is attempted.
        let bounds = Bounds::symmetric(1, 1e-9);
        let params = MdsParams {
            delta: 1e-10,
            eps: 1e-6,
            ..Default::default()
        };
        let outcome = mds_minimize(&sphere, &[0.0], &bounds, &params);
        assert_eq!(outcome.term, TermCode::Converged);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn eval_budget_exhausts_when_too_small() {
        let bounds = Bounds::symmetric(4, 2.0);
        let params = MdsParams {
            maxfevals: 10,
            maxiter: 10_000,
            ..Default::default()
        };
        let outcome = mds_minimize(&sphere, &[1.0, 1.0, 1.0, 1.0], &bounds, &params);
        assert_eq!(outcome.term, TermCode::EvalBudget);
    }

    #[test]
    fn argmin_is_stable_under_identity_permutation_of_the_simplex() {
        let mut s = Simplex::initialize(&[0.0, 0.0], 1.0);
        s.set_value(0, 3.0);
        s.set_value(1, 1.0);
        s.set_value(2, 2.0);

        let winner = s.argmin();
        let winning_vertex = s.vertex(winner).to_vec();
        let winning_value = s.value(winner);

        // Swap two vertices, then swap them back: a genuine reordering of
        // S/fu whose net effect is the identity, rather than comparing a
        // value against an untouched clone of itself.
        s.swap(0, 2);
        s.swap(0, 2);

        assert_eq!(s.argmin(), winner);
        assert_eq!(s.vertex(s.argmin()).to_vec(), winning_vertex);
        assert_eq!(s.value(s.argmin()), winning_value);
    }

    #[test]
    fn simplex_size_is_monotonically_non_increasing_once_contraction_starts() {
        // An offset start with a comparatively large delta forces at least
        // one contraction before convergence.
        let bounds = Bounds::symmetric(4, 2.0);
        let params = MdsParams {
            delta: 1.0,
            ..Default::default()
        };
        let mut trace = Vec::new();
        let outcome = mds_minimize_traced(
            &sphere,
            &[1.5, -1.5, 1.5, -1.5],
            &bounds,
            &params,
            Some(&mut trace),
        );
        assert_eq!(outcome.term, TermCode::Converged);

        let first_contraction = trace
            .iter()
            .position(|&(_, took_contraction)| took_contraction)
            .expect("this run is expected to take at least one contraction step");

        // spec.md §8: size(S) is non-increasing over outer iterations once a
        // contraction step has been taken. Sizes entering an iteration at or
        // before `first_contraction` predate any contraction, so the
        // invariant only covers sizes recorded strictly afterward.
        let sizes_after_first_contraction: Vec<f64> = trace[first_contraction + 1..]
            .iter()
            .map(|&(size, _)| size)
            .collect();
        assert!(
            sizes_after_first_contraction.len() >= 2,
            "need at least two recorded sizes after the first contraction to check monotonicity"
        );
        for window in sizes_after_first_contraction.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-12,
                "simplex size grew after a contraction: {} -> {}",
                window[0],
                window[1]
            );
        }
    }
}
