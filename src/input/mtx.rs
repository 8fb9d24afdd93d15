use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::input::{InputError, open_reader};
use crate::matrix::csr::CsrMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MtxField {
    Real,
    Integer,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MtxSymmetry {
    General,
    Symmetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixHeader {
    pub field: MtxField,
    pub symmetry: MtxSymmetry,
    pub n_rows: usize,
    pub n_cols: usize,
    pub nnz: usize,
}

fn parse_banner(line: &str) -> Result<(MtxField, MtxSymmetry), InputError> {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    if tokens.len() != 5 || tokens[0] != "%%matrixmarket" || tokens[1] != "matrix" {
        return Err(InputError::InvalidMtxHeader(line.to_string()));
    }
    if tokens[2] != "coordinate" {
        return Err(InputError::InvalidMtxHeader(format!(
            "only coordinate format is supported, got {}",
            tokens[2]
        )));
    }
    let field = match tokens[3].as_str() {
        "real" | "double" => MtxField::Real,
        "integer" => MtxField::Integer,
        "pattern" => MtxField::Pattern,
        other => {
            return Err(InputError::InvalidMtxHeader(format!(
                "unsupported field type {other}"
            )));
        }
    };
    let symmetry = match tokens[4].as_str() {
        "general" => MtxSymmetry::General,
        "symmetric" => MtxSymmetry::Symmetric,
        other => {
            return Err(InputError::InvalidMtxHeader(format!(
                "unsupported symmetry {other}"
            )));
        }
    };
    Ok((field, symmetry))
}

/// Upper bound on entries preallocated from the size line; larger files grow
/// the buffer as lines are read.
const MAX_PREALLOC: usize = 1 << 20;

fn parse_usize(token: Option<&str>, line: usize, what: &str) -> Result<usize, InputError> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| InputError::InvalidMtxEntry {
            line,
            reason: format!("missing or invalid {what}"),
        })
}

/// Reads a coordinate Matrix Market file into CSR. Indices are 1-based on
/// disk; symmetric files store one triangle and are mirrored here.
pub fn read_mtx(path: &Path) -> Result<CsrMatrix, InputError> {
    let (header, entries) = read_entries(path)?;
    Ok(CsrMatrix::from_triplets(
        header.n_rows,
        header.n_cols,
        entries,
    )?)
}

pub fn read_entries(path: &Path) -> Result<(MatrixHeader, Vec<(u32, u32, f64)>), InputError> {
    let reader = open_reader(path)?;
    let mut lines = reader.lines().enumerate();

    let banner = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(InputError::InvalidMtxHeader("empty file".to_string())),
    };
    let (field, symmetry) = parse_banner(&banner)?;

    let mut header: Option<MatrixHeader> = None;
    let mut entries = Vec::new();
    let mut stored = 0usize;
    let mut last_line = 1usize;
    for (idx, line) in lines {
        let line = line?;
        let line_no = idx + 1;
        last_line = line_no;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();

        let Some(h) = header else {
            let n_rows = parse_usize(tokens.next(), line_no, "row count")?;
            let n_cols = parse_usize(tokens.next(), line_no, "column count")?;
            let nnz = parse_usize(tokens.next(), line_no, "entry count")?;
            if n_rows > u32::MAX as usize || n_cols > u32::MAX as usize {
                return Err(InputError::InvalidMtxHeader(format!(
                    "dimensions {n_rows}x{n_cols} exceed the u32 index range"
                )));
            }
            if symmetry == MtxSymmetry::Symmetric && n_rows != n_cols {
                return Err(InputError::InvalidMtxHeader(format!(
                    "symmetric matrix must be square, got {n_rows}x{n_cols}"
                )));
            }
            header = Some(MatrixHeader {
                field,
                symmetry,
                n_rows,
                n_cols,
                nnz,
            });
            entries.reserve(nnz.min(MAX_PREALLOC));
            continue;
        };

        let row = parse_usize(tokens.next(), line_no, "row index")?;
        let col = parse_usize(tokens.next(), line_no, "column index")?;
        if row == 0 || col == 0 || row > h.n_rows || col > h.n_cols {
            return Err(InputError::InvalidMtxEntry {
                line: line_no,
                reason: format!("index ({row}, {col}) outside {}x{}", h.n_rows, h.n_cols),
            });
        }
        let value = match field {
            MtxField::Pattern => 1.0,
            MtxField::Real | MtxField::Integer => tokens
                .next()
                .and_then(|t| t.parse::<f64>().ok())
                .ok_or_else(|| InputError::InvalidMtxEntry {
                    line: line_no,
                    reason: "missing or invalid value".to_string(),
                })?,
        };
        stored += 1;
        if stored > h.nnz {
            return Err(InputError::InvalidMtxEntry {
                line: line_no,
                reason: format!("more entries than the {} declared", h.nnz),
            });
        }
        let (r, c) = ((row - 1) as u32, (col - 1) as u32);
        entries.push((r, c, value));
        if symmetry == MtxSymmetry::Symmetric && r != c {
            entries.push((c, r, value));
        }
    }

    let header =
        header.ok_or_else(|| InputError::InvalidMtxHeader("missing size line".to_string()))?;
    // Symmetric files count the stored triangle, not the mirrored entries.
    if stored != header.nnz {
        return Err(InputError::InvalidMtxEntry {
            line: last_line,
            reason: format!("expected {} entries, found {stored}", header.nnz),
        });
    }
    Ok((header, entries))
}

/// Writes a `real general` coordinate file, one line per stored entry.
pub fn write_mtx(path: &Path, matrix: &CsrMatrix) -> Result<(), InputError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "%%MatrixMarket matrix coordinate real general")?;
    writeln!(out, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz())?;
    for row in 0..matrix.n_rows {
        for (col, value) in matrix.row(row) {
            writeln!(out, "{} {} {}", row + 1, col + 1, value)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mtx.rs"]
mod tests;
