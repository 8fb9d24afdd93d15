pub mod csr;
pub mod dense;
pub mod normalize;

use thiserror::Error;

use crate::matrix::csr::CsrMatrix;
use crate::matrix::dense::DenseMatrix;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatrixError {
    #[error("expected {expected} values, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("entry ({row}, {col}) outside {n_rows}x{n_cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },
    #[error("{n_rows}x{n_cols} matrix is too large to index")]
    TooLarge { n_rows: usize, n_cols: usize },
}

/// Default tolerance for [`is_symmetric`].
pub const SYMMETRY_TOL: f64 = 1e-8;

#[derive(Debug, Clone, PartialEq)]
pub enum Matrix {
    Dense(DenseMatrix),
    Sparse(CsrMatrix),
}

impl Matrix {
    pub fn is_dense(&self) -> bool {
        matches!(self, Matrix::Dense(_))
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, Matrix::Sparse(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Matrix::Dense(_) => "dense",
            Matrix::Sparse(_) => "sparse",
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            Matrix::Dense(m) => m.shape(),
            Matrix::Sparse(m) => m.shape(),
        }
    }

    pub fn row_sums(&self) -> Vec<f64> {
        match self {
            Matrix::Dense(m) => m.row_sums(),
            Matrix::Sparse(m) => m.row_sums(),
        }
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(value: DenseMatrix) -> Self {
        Matrix::Dense(value)
    }
}

impl From<CsrMatrix> for Matrix {
    fn from(value: CsrMatrix) -> Self {
        Matrix::Sparse(value)
    }
}

/// Same container kind, same shape and no differing entries. Sparse
/// matrices are compared row by row on their nonzero entries.
pub fn matrix_is_equivalent(a: &Matrix, b: &Matrix) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Matrix::Dense(x), Matrix::Dense(y)) => x.shape() == y.shape() && x.values == y.values,
        (Matrix::Sparse(x), Matrix::Sparse(y)) => {
            x.shape() == y.shape()
                && (0..x.n_rows).all(|i| {
                    let lhs = x.row(i).filter(|(_, v)| *v != 0.0);
                    let rhs = y.row(i).filter(|(_, v)| *v != 0.0);
                    lhs.eq(rhs)
                })
        }
        _ => false,
    }
}

/// Square and element-wise close to its transpose, within `tol` both
/// relative and absolute.
pub fn is_symmetric(m: &Matrix, tol: f64) -> bool {
    match m {
        Matrix::Dense(d) => d.is_symmetric(tol),
        Matrix::Sparse(s) => s.is_symmetric(tol),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/matrix/mod.rs"]
mod tests;
