use ndarray::{Array1, Array2, Axis};

use crate::bounds::Bounds;

/// An ordered (n+1)-vertex simplex in ℝⁿ with a parallel vector of function
/// values. After each outer MDS iteration, vertex 0 holds the lowest `fu`;
/// the remaining vertices are unordered.
#[derive(Debug, Clone)]
pub struct Simplex {
    vertices: Array2<f64>,
    fu: Array1<f64>,
}

impl Simplex {
    /// Right-angled simplex of edge `delta` anchored at `point`: vertex 0 is
    /// `point`, and vertex `i` (1..=n) is `point` with component `i-1`
    /// incremented by `delta`.
    pub fn initialize(point: &[f64], delta: f64) -> Self {
        let n = point.len();
        let vertices = Array2::from_shape_fn((n + 1, n), |(i, j)| {
            if i > 0 && i - 1 == j {
                point[j] + delta
            } else {
                point[j]
            }
        });
        Self {
            vertices,
            fu: Array1::zeros(n + 1),
        }
    }

    /// An uninitialized (all-zero) `(n+1) x n` scratch simplex, used for the
    /// reflection/expansion/contraction candidates built each outer
    /// iteration.
    pub fn scratch(n: usize) -> Self {
        Self {
            vertices: Array2::zeros((n + 1, n)),
            fu: Array1::zeros(n + 1),
        }
    }

    pub fn dim(&self) -> usize {
        self.vertices.ncols()
    }

    /// Overwrites vertex `i`'s coordinates.
    pub fn set_vertex(&mut self, i: usize, row: &[f64]) {
        self.vertices
            .row_mut(i)
            .assign(&ndarray::ArrayView1::from(row));
    }

    pub fn vertex(&self, i: usize) -> ndarray::ArrayView1<'_, f64> {
        self.vertices.row(i)
    }

    pub fn value(&self, i: usize) -> f64 {
        self.fu[i]
    }

    pub fn set_value(&mut self, i: usize, v: f64) {
        self.fu[i] = v;
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.fu
    }

    pub fn vertices(&self) -> &Array2<f64> {
        &self.vertices
    }

    /// Index of the smallest `fu[i]`. Ties broken by lowest index.
    pub fn argmin(&self) -> usize {
        argmin(self.fu.as_slice().expect("contiguous fu"))
    }

    /// `max_i ||vertex(i) - centroid||_2`, the simplex's collapse measure.
    pub fn size(&self) -> f64 {
        let n_plus_1 = self.vertices.nrows() as f64;
        let centroid = self.vertices.sum_axis(Axis(0)) / n_plus_1;
        self.vertices
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .zip(centroid.iter())
                    .map(|(&x, &c)| (x - c) * (x - c))
                    .sum::<f64>()
                    .sqrt()
            })
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Exchanges vertices `a` and `b` together with their function values.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let row_a = self.vertices.row(a).to_owned();
        let row_b = self.vertices.row(b).to_owned();
        self.vertices.row_mut(a).assign(&row_b);
        self.vertices.row_mut(b).assign(&row_a);
        self.fu.swap(a, b);
    }

    /// Copies vertices `1..=n` and their function values from `src` into
    /// `self`. Vertex 0 (the shared pivot) is never touched.
    pub fn assign_from(&mut self, src: &Simplex) {
        let n = self.dim();
        self.vertices
            .slice_mut(ndarray::s![1..=n, ..])
            .assign(&src.vertices.slice(ndarray::s![1..=n, ..]));
        for i in 1..=n {
            self.fu[i] = src.fu[i];
        }
    }

    /// True iff every vertex is in-bounds.
    pub fn in_bounds(&self, bounds: &Bounds) -> bool {
        self.vertices
            .rows()
            .into_iter()
            .all(|row| bounds.contains(row.as_slice().expect("contiguous row")))
    }
}

/// Index of the smallest element, ties broken by lowest index.
pub fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = i;
        }
    }
    best
}
