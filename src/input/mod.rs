pub mod delimited;
pub mod detect;
pub mod mtx;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::detect::{MatrixFormat, detect_format};
use crate::matrix::{Matrix, MatrixError};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing required file: {0}")]
    MissingFile(PathBuf),
    #[error("unrecognized matrix file extension: {0}")]
    UnknownFormat(PathBuf),
    #[error("invalid matrix market header: {0}")]
    InvalidMtxHeader(String),
    #[error("invalid matrix market entry at line {line}: {reason}")]
    InvalidMtxEntry { line: usize, reason: String },
    #[error("invalid delimited row at line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingFile(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    if detect::is_gzip(path) {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

/// Loads a matrix, choosing the reader from the file name.
/// Matrix Market files load sparse; delimited text loads dense.
pub fn load_matrix(path: &Path) -> Result<Matrix, InputError> {
    match detect_format(path)? {
        MatrixFormat::MatrixMarket => Ok(Matrix::Sparse(mtx::read_mtx(path)?)),
        format @ (MatrixFormat::Tsv | MatrixFormat::Csv) => Ok(Matrix::Dense(
            delimited::read_dense(path, format.delimiter())?,
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
