use std::path::Path;

use crate::input::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    MatrixMarket,
    Tsv,
    Csv,
}

impl MatrixFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            MatrixFormat::Csv => b',',
            MatrixFormat::MatrixMarket | MatrixFormat::Tsv => b'\t',
        }
    }
}

impl std::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixFormat::MatrixMarket => write!(f, "matrix_market"),
            MatrixFormat::Tsv => write!(f, "tsv"),
            MatrixFormat::Csv => write!(f, "csv"),
        }
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Extension of the file with any trailing `.gz` removed.
fn inner_extension(path: &Path) -> Option<String> {
    let stem_path;
    let path = if is_gzip(path) {
        stem_path = path.with_extension("");
        stem_path.as_path()
    } else {
        path
    };
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}

pub fn detect_format(path: &Path) -> Result<MatrixFormat, InputError> {
    match inner_extension(path).as_deref() {
        Some("mtx") => Ok(MatrixFormat::MatrixMarket),
        Some("tsv") | Some("tab") | Some("txt") => Ok(MatrixFormat::Tsv),
        Some("csv") => Ok(MatrixFormat::Csv),
        _ => Err(InputError::UnknownFormat(path.to_path_buf())),
    }
}

pub fn is_matrix_market(path: &Path) -> bool {
    matches!(detect_format(path), Ok(MatrixFormat::MatrixMarket))
}

pub fn is_delimited(path: &Path) -> bool {
    matches!(
        detect_format(path),
        Ok(MatrixFormat::Tsv | MatrixFormat::Csv)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/detect.rs"]
mod tests;
