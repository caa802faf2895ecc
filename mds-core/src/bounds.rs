use ndarray::Array1;

/// Element-wise box constraints on ℝⁿ.
///
/// A point `p` is in-bounds iff `lo[j] <= p[j] <= xr[j]` for every `j`
/// (boundary points count as in-bounds).
#[derive(Debug, Clone)]
pub struct Bounds {
    lo: Array1<f64>,
    hi: Array1<f64>,
}

impl Bounds {
    /// Builds bounds from lower/upper vectors. The caller is responsible for
    /// the `lo[j] < hi[j]` invariant; validation lives at the configuration
    /// boundary (see `mds-multistart::error::ConfigError`).
    pub fn new(lo: Array1<f64>, hi: Array1<f64>) -> Self {
        debug_assert_eq!(lo.len(), hi.len());
        Self { lo, hi }
    }

    /// Symmetric bounds `[-half, +half]` in every dimension, e.g. the
    /// multistart driver's default `xl = -2, xr = +2`.
    pub fn symmetric(n: usize, half: f64) -> Self {
        Self {
            lo: Array1::from_elem(n, -half),
            hi: Array1::from_elem(n, half),
        }
    }

    pub fn dim(&self) -> usize {
        self.lo.len()
    }

    pub fn lo(&self) -> &Array1<f64> {
        &self.lo
    }

    pub fn hi(&self) -> &Array1<f64> {
        &self.hi
    }

    /// True iff `lo[j] < hi[j]` for every dimension.
    pub fn is_valid(&self) -> bool {
        self.lo.len() == self.hi.len()
            && self
                .lo
                .iter()
                .zip(self.hi.iter())
                .all(|(&l, &h)| l < h)
    }

    /// True iff `p` is in-bounds in every dimension. Boundary points count
    /// as in-bounds (the source rejects strict inequality).
    pub fn contains(&self, p: &[f64]) -> bool {
        p.iter()
            .zip(self.lo.iter())
            .zip(self.hi.iter())
            .all(|((&x, &l), &h)| x >= l && x <= h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_bounds_contain_center() {
        let b = Bounds::symmetric(3, 2.0);
        assert!(b.contains(&[0.0, -2.0, 2.0]));
        assert!(!b.contains(&[0.0, -2.0001, 2.0]));
    }

    #[test]
    fn degenerate_bounds_are_invalid() {
        let b = Bounds::new(Array1::from_vec(vec![1.0]), Array1::from_vec(vec![1.0]));
        assert!(!b.is_valid());
    }
}
