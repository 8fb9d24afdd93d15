use std::fs::File;
use std::path::Path;

use crate::input::{InputError, open_reader};
use crate::matrix::dense::DenseMatrix;

/// Reads a headerless delimited numeric table. Lines starting with `#` are
/// skipped; every record must have the same number of fields.
pub fn read_dense(path: &Path, delimiter: u8) -> Result<DenseMatrix, InputError> {
    let reader = open_reader(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let row = record
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|_| InputError::InvalidRow {
                    line,
                    reason: format!("not a number: {field:?}"),
                })
            })
            .collect::<Result<Vec<f64>, InputError>>()?;
        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            return Err(InputError::InvalidRow {
                line,
                reason: format!("expected {} fields, got {}", first.len(), row.len()),
            });
        }
        rows.push(row);
    }

    Ok(DenseMatrix::from_rows(&rows)?)
}

pub fn write_dense(path: &Path, matrix: &DenseMatrix, delimiter: u8) -> Result<(), InputError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(file);
    for row in matrix.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/delimited.rs"]
mod tests;
