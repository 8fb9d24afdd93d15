use super::*;
use crate::input::detect::MatrixFormat;
use crate::matrix::Matrix;
use crate::matrix::dense::DenseMatrix;
use tempfile::tempdir;

#[test]
fn summary_json_has_expected_fields() {
    let dir = tempdir().expect("tempdir");
    let matrix = Matrix::Dense(
        DenseMatrix::from_rows(&[[0.0, 0.0], [1.0, 3.0]]).expect("matrix"),
    );
    let input_path = dir.path().join("m.tsv");
    let input = crate::report::MatrixSummary::describe(&input_path, MatrixFormat::Tsv, &matrix);
    let summary = NormalizeSummary::new(input, &matrix, &dir.path().join("normalized.tsv"));

    let path = write_summary(dir.path(), &summary).expect("write summary");
    let text = std::fs::read_to_string(path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");

    assert_eq!(value["tool"]["name"], "ephate-utils");
    assert_eq!(value["input"]["format"], "tsv");
    assert_eq!(value["input"]["kind"], "dense");
    assert_eq!(value["input"]["n_rows"], 2);
    assert_eq!(value["input"]["row_normalized"], false);
    assert_eq!(value["input"]["symmetric"], false);
    assert_eq!(value["normalization"]["zero_rows"], 1);
    assert_eq!(value["normalization"]["already_normalized"], false);
}
