use super::*;

#[test]
fn detects_by_extension() {
    assert_eq!(
        detect_format(Path::new("a/matrix.mtx")).expect("mtx"),
        MatrixFormat::MatrixMarket
    );
    assert_eq!(
        detect_format(Path::new("matrix.mtx.gz")).expect("mtx.gz"),
        MatrixFormat::MatrixMarket
    );
    assert_eq!(detect_format(Path::new("x.TSV")).expect("tsv"), MatrixFormat::Tsv);
    assert_eq!(detect_format(Path::new("x.csv.gz")).expect("csv"), MatrixFormat::Csv);
}

#[test]
fn unknown_extension_fails() {
    assert!(detect_format(Path::new("x.gz")).is_err());
    assert!(detect_format(Path::new("noext")).is_err());
}

#[test]
fn detection_answers_without_erroring() {
    assert!(is_matrix_market(Path::new("m.mtx")));
    assert!(!is_matrix_market(Path::new("m.tsv")));
    assert!(is_delimited(Path::new("m.csv")));
    assert!(!is_delimited(Path::new("m.h5ad")));
    assert!(is_gzip(Path::new("m.tsv.gz")));
}

#[test]
fn delimiters_follow_format() {
    assert_eq!(MatrixFormat::Csv.delimiter(), b',');
    assert_eq!(MatrixFormat::Tsv.delimiter(), b'\t');
    assert_eq!(MatrixFormat::MatrixMarket.to_string(), "matrix_market");
}
