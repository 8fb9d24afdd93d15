use crate::matrix::MatrixError;
use crate::matrix::normalize::Tolerance;

/// Row-major dense matrix; rows are observations, columns are features.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    pub n_rows: usize,
    pub n_cols: usize,
    pub values: Vec<f64>,
}

impl DenseMatrix {
    pub fn new(n_rows: usize, n_cols: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        let expected = n_rows * n_cols;
        if values.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            n_rows,
            n_cols,
            values,
        })
    }

    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            values: vec![0.0; n_rows * n_cols],
        }
    }

    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut values = Vec::with_capacity(rows.len() * n_cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRow {
                    row: idx,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            n_rows: rows.len(),
            n_cols,
            values,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn row(&self, idx: usize) -> &[f64] {
        let start = idx * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_rows).map(move |i| self.row(i))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.n_rows || col >= self.n_cols {
            return None;
        }
        Some(self.values[row * self.n_cols + col])
    }

    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|r| r.iter().sum()).collect()
    }

    pub fn is_symmetric(&self, tol: f64) -> bool {
        if self.n_rows != self.n_cols {
            return false;
        }
        let tol = Tolerance::symmetric(tol);
        let n = self.n_rows;
        (0..n).all(|i| {
            (0..n).all(|j| tol.is_close(self.values[i * n + j], self.values[j * n + i]))
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/matrix/dense.rs"]
mod tests;
