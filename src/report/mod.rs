pub mod json;
pub mod text;

use serde::Serialize;
use thiserror::Error;

use crate::input::detect::MatrixFormat;
use crate::matrix::normalize::{NormalizeStats, is_row_normalized, normalize_stats};
use crate::matrix::{Matrix, SYMMETRY_TOL, is_symmetric};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

impl Default for ToolSummary {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixSummary {
    pub path: String,
    pub format: String,
    pub kind: String,
    pub n_rows: usize,
    pub n_cols: usize,
    pub row_normalized: bool,
    pub symmetric: bool,
}

impl MatrixSummary {
    pub fn describe(path: &std::path::Path, format: MatrixFormat, matrix: &Matrix) -> Self {
        let (n_rows, n_cols) = matrix.shape();
        Self {
            path: path.to_string_lossy().to_string(),
            format: format.to_string(),
            kind: matrix.kind().to_string(),
            n_rows,
            n_cols,
            row_normalized: is_row_normalized(matrix),
            symmetric: is_symmetric(matrix, SYMMETRY_TOL),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizeSummary {
    pub tool: ToolSummary,
    pub input: MatrixSummary,
    pub normalization: NormalizeStats,
    pub output: String,
}

impl NormalizeSummary {
    pub fn new(input: MatrixSummary, matrix: &Matrix, output: &std::path::Path) -> Self {
        Self {
            tool: ToolSummary::default(),
            input,
            normalization: normalize_stats(matrix),
            output: output.to_string_lossy().to_string(),
        }
    }
}
