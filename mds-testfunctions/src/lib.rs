//! Reference objective functions for exercising the MDS optimizer.
//!
//! The only function the multistart driver actually ships with is
//! [`rosenbrock`]; everything here exists for tests and benchmarks, never
//! for the algorithmic core itself (the objective is always supplied by the
//! caller — spec.md §1).

use std::thread;
use std::time::Duration;

use mds_core::Bounds;

/// Rosenbrock's classic parabolic-valley ("banana") function.
///
/// f(x) = Σᵢ 100(x_{i+1} − x_i²)² + (x_i − 1)², global minimum 0 at x=(1,…,1).
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}

/// [`rosenbrock`] with the artificial per-call delay the reference C
/// implementation performs (`usleep(10)` in
/// `multistart/multistart_mds_mpi.c`). The delay models the cost of a real
/// objective evaluation; it does not change the returned value.
pub fn rosenbrock_with_delay(x: &[f64]) -> f64 {
    let fv = rosenbrock(x);
    thread::sleep(Duration::from_micros(10));
    fv
}

/// The reference multistart driver's default search box: `[-2, 2]` in every
/// dimension.
pub fn default_bounds(n: usize) -> Bounds {
    Bounds::symmetric(n, 2.0)
}
