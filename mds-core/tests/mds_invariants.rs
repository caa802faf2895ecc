use mds_core::{mds_minimize, Bounds, MdsParams, TermCode};

fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

#[test]
fn large_budgets_always_converge() {
    let bounds = Bounds::symmetric(4, 2.0);
    let params = MdsParams {
        maxfevals: 200_000,
        maxiter: 200_000,
        ..Default::default()
    };
    let outcome = mds_minimize(&rosenbrock, &[-1.5, 0.5, -0.5, 1.8], &bounds, &params);
    assert_eq!(outcome.term, TermCode::Converged);
}

#[test]
fn iteration_budget_is_honored_when_too_small() {
    let bounds = Bounds::symmetric(4, 2.0);
    let params = MdsParams {
        maxfevals: 1_000_000,
        maxiter: 3,
        ..Default::default()
    };
    let outcome = mds_minimize(&rosenbrock, &[-1.5, 0.5, -0.5, 1.8], &bounds, &params);
    assert_eq!(outcome.term, TermCode::IterBudget);
    assert_eq!(outcome.iterations, 3);
}

#[test]
fn rosenbrock_4d_reaches_the_optimum_from_an_offset_start() {
    let bounds = Bounds::symmetric(4, 2.0);
    let params = MdsParams::default();
    let start = [0.1, 1.6, -1.2, 0.5];
    let outcome = mds_minimize(&rosenbrock, &start, &bounds, &params);
    assert_eq!(outcome.term, TermCode::Converged);
    assert!(outcome.fx < 1e-6, "fx = {}", outcome.fx);
    for &xi in &outcome.endpoint {
        assert!((xi - 1.0).abs() < 1e-2, "endpoint component {} not near 1.0", xi);
    }
}
