use crate::matrix::MatrixError;
use crate::matrix::dense::DenseMatrix;
use crate::matrix::normalize::Tolerance;

/// Compressed sparse rows. Column indices are sorted and unique within a row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    pub n_rows: usize,
    pub n_cols: usize,
    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<u32>,
    pub values: Vec<f64>,
}

impl CsrMatrix {
    /// Builds from `(row, col, value)` entries in any order. Repeated
    /// coordinates are summed.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        mut entries: Vec<(u32, u32, f64)>,
    ) -> Result<Self, MatrixError> {
        if n_rows > u32::MAX as usize || n_cols > u32::MAX as usize {
            return Err(MatrixError::TooLarge { n_rows, n_cols });
        }
        for &(row, col, _) in &entries {
            if row as usize >= n_rows || col as usize >= n_cols {
                return Err(MatrixError::IndexOutOfBounds {
                    row: row as usize,
                    col: col as usize,
                    n_rows,
                    n_cols,
                });
            }
        }

        entries.sort_by(|a, b| match a.0.cmp(&b.0) {
            std::cmp::Ordering::Equal => a.1.cmp(&b.1),
            other => other,
        });

        let too_large = MatrixError::TooLarge { n_rows, n_cols };
        let ptr_len = n_rows.checked_add(1).ok_or(too_large.clone())?;
        let mut row_ptr: Vec<usize> = Vec::new();
        row_ptr
            .try_reserve_exact(ptr_len)
            .map_err(|_| too_large)?;
        row_ptr.resize(ptr_len, 0);
        let mut col_idx: Vec<u32> = Vec::with_capacity(entries.len());
        let mut values: Vec<f64> = Vec::with_capacity(entries.len());
        let mut last: Option<(u32, u32)> = None;
        for (row, col, val) in entries {
            if last == Some((row, col)) {
                if let Some(v) = values.last_mut() {
                    *v += val;
                }
                continue;
            }
            last = Some((row, col));
            row_ptr[row as usize + 1] += 1;
            col_idx.push(col);
            values.push(val);
        }
        for i in 0..n_rows {
            row_ptr[i + 1] += row_ptr[i];
        }

        Ok(Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row(&self, idx: usize) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[idx];
        let end = self.row_ptr[idx + 1];
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// Stored value at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: u32) -> Option<f64> {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_idx[start..end]
            .binary_search(&col)
            .ok()
            .map(|k| self.values[start + k])
    }

    /// Symmetry over stored entries only. An entry whose mirror is not stored
    /// is compared against zero in both directions.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if self.n_rows != self.n_cols {
            return false;
        }
        let tol = Tolerance::symmetric(tol);
        (0..self.n_rows).all(|i| {
            self.row(i)
                .all(|(j, v)| match self.get(j as usize, i as u32) {
                    Some(mirror) => tol.is_close(v, mirror),
                    None => tol.is_close(v, 0.0) && tol.is_close(0.0, v),
                })
        })
    }

    pub fn row_sums(&self) -> Vec<f64> {
        self.row_ptr
            .windows(2)
            .map(|w| self.values[w[0]..w[1]].iter().sum())
            .collect()
    }

    pub fn to_dense(&self) -> DenseMatrix {
        let mut out = DenseMatrix::zeros(self.n_rows, self.n_cols);
        for row in 0..self.n_rows {
            for (col, value) in self.row(row) {
                out.values[row * self.n_cols + col as usize] = value;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/matrix/csr.rs"]
mod tests;
