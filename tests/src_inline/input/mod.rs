use super::*;
use tempfile::tempdir;

#[test]
fn loads_tsv_as_dense() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.tsv");
    std::fs::write(&path, "1\t2\n3\t4\n").expect("write");
    let m = load_matrix(&path).expect("load");
    assert!(m.is_dense());
    assert_eq!(m.shape(), (2, 2));
}

#[test]
fn loads_mtx_as_sparse() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.mtx");
    std::fs::write(
        &path,
        "%%MatrixMarket matrix coordinate real general\n2 2 1\n1 2 0.5\n",
    )
    .expect("write");
    let m = load_matrix(&path).expect("load");
    assert!(m.is_sparse());
    assert_eq!(m.row_sums(), vec![0.5, 0.0]);
}

#[cfg(feature = "gz")]
#[test]
fn reads_gzip_input() {
    use std::io::Write;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.csv.gz");
    let file = std::fs::File::create(&path).expect("create");
    let mut enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    enc.write_all(b"1,3\n0,0\n").expect("write");
    enc.finish().expect("finish");

    let m = load_matrix(&path).expect("load");
    assert_eq!(m.row_sums(), vec![4.0, 0.0]);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = load_matrix(&dir.path().join("absent.tsv")).expect_err("missing");
    assert!(matches!(err, InputError::MissingFile(_)));
}

#[test]
fn unknown_extension_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.bin");
    std::fs::write(&path, "x").expect("write");
    assert!(matches!(
        load_matrix(&path),
        Err(InputError::UnknownFormat(_))
    ));
}
