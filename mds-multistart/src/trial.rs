use mds_core::TermCode;

/// One independent local search from one starting point. Immutable after
/// creation (spec.md §3).
#[derive(Debug, Clone)]
pub struct Trial {
    pub index: i64,
    pub iterations: usize,
    pub evaluations: usize,
    pub endpoint: Vec<f64>,
    pub fx: f64,
    pub term: TermCode,
}
