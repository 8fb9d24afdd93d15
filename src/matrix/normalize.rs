use std::borrow::Cow;

use crate::matrix::Matrix;
use crate::matrix::csr::CsrMatrix;
use crate::matrix::dense::DenseMatrix;

/// Closeness test `|a - b| <= atol + rtol * |b|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl Tolerance {
    pub fn symmetric(tol: f64) -> Self {
        Self {
            rtol: tol,
            atol: tol,
        }
    }

    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

/// Matrices that can be summed and rescaled row by row.
pub trait RowScale: Clone {
    fn row_sums(&self) -> Vec<f64>;

    /// Divides row `i` by `divisors[i]`, producing a new matrix.
    fn divide_rows(&self, divisors: &[f64]) -> Self;
}

impl RowScale for DenseMatrix {
    fn row_sums(&self) -> Vec<f64> {
        DenseMatrix::row_sums(self)
    }

    fn divide_rows(&self, divisors: &[f64]) -> Self {
        let mut out = self.clone();
        if out.n_cols == 0 {
            return out;
        }
        for (row, d) in out.values.chunks_exact_mut(self.n_cols).zip(divisors) {
            row.iter_mut().for_each(|v| *v /= d);
        }
        out
    }
}

impl RowScale for CsrMatrix {
    fn row_sums(&self) -> Vec<f64> {
        CsrMatrix::row_sums(self)
    }

    fn divide_rows(&self, divisors: &[f64]) -> Self {
        let mut out = self.clone();
        for (w, d) in self.row_ptr.windows(2).zip(divisors) {
            out.values[w[0]..w[1]].iter_mut().for_each(|v| *v /= d);
        }
        out
    }
}

impl RowScale for Matrix {
    fn row_sums(&self) -> Vec<f64> {
        Matrix::row_sums(self)
    }

    fn divide_rows(&self, divisors: &[f64]) -> Self {
        match self {
            Matrix::Dense(m) => Matrix::Dense(m.divide_rows(divisors)),
            Matrix::Sparse(m) => Matrix::Sparse(m.divide_rows(divisors)),
        }
    }
}

pub fn is_row_normalized<M: RowScale>(m: &M) -> bool {
    is_row_normalized_with(m, Tolerance::default())
}

/// True when every row sums to 1 within `tol`. A matrix with no rows is
/// trivially normalized.
pub fn is_row_normalized_with<M: RowScale>(m: &M, tol: Tolerance) -> bool {
    m.row_sums().iter().all(|s| tol.is_close(*s, 1.0))
}

pub fn row_normalize<M: RowScale>(m: &M) -> Cow<'_, M> {
    row_normalize_with(m, Tolerance::default())
}

/// Scales each row to sum to 1. Returns the input borrowed when it is already
/// row-normalized. Rows summing to exactly zero stay zero; negative sums are
/// divided through as-is.
pub fn row_normalize_with<M: RowScale>(m: &M, tol: Tolerance) -> Cow<'_, M> {
    let sums = m.row_sums();
    if sums.iter().all(|s| tol.is_close(*s, 1.0)) {
        return Cow::Borrowed(m);
    }
    let divisors: Vec<f64> = sums
        .into_iter()
        .map(|s| if s == 0.0 { 1.0 } else { s })
        .collect();
    Cow::Owned(m.divide_rows(&divisors))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct NormalizeStats {
    pub n_rows: usize,
    pub zero_rows: usize,
    pub already_normalized: bool,
}

pub fn normalize_stats<M: RowScale>(m: &M) -> NormalizeStats {
    let sums = m.row_sums();
    let tol = Tolerance::default();
    NormalizeStats {
        n_rows: sums.len(),
        zero_rows: sums.iter().filter(|s| **s == 0.0).count(),
        already_normalized: sums.iter().all(|s| tol.is_close(*s, 1.0)),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/matrix/normalize.rs"]
mod tests;
