use super::*;

fn dense(rows: &[[f64; 2]]) -> DenseMatrix {
    DenseMatrix::from_rows(rows).expect("matrix")
}

#[test]
fn predicates_report_container_kind() {
    let d = Matrix::from(dense(&[[1.0, 0.0]]));
    let s = Matrix::from(CsrMatrix::from_triplets(1, 2, vec![(0, 0, 1.0)]).expect("csr"));
    assert!(d.is_dense() && !d.is_sparse());
    assert!(s.is_sparse() && !s.is_dense());
}

#[test]
fn equivalence_requires_same_kind_shape_and_values() {
    let a = Matrix::from(dense(&[[1.0, 2.0], [3.0, 4.0]]));
    let b = Matrix::from(dense(&[[1.0, 2.0], [3.0, 4.0]]));
    let c = Matrix::from(dense(&[[1.0, 2.0], [3.0, 5.0]]));
    assert!(matrix_is_equivalent(&a, &a));
    assert!(matrix_is_equivalent(&a, &b));
    assert!(!matrix_is_equivalent(&a, &c));

    let sparse = Matrix::from(
        CsrMatrix::from_triplets(
            2,
            2,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)],
        )
        .expect("csr"),
    );
    assert!(!matrix_is_equivalent(&a, &sparse));
}

#[test]
fn sparse_equivalence_ignores_stored_zeros() {
    let a = Matrix::from(
        CsrMatrix::from_triplets(2, 2, vec![(0, 1, 2.0), (1, 0, 0.0)]).expect("csr"),
    );
    let b = Matrix::from(CsrMatrix::from_triplets(2, 2, vec![(0, 1, 2.0)]).expect("csr"));
    let c = Matrix::from(CsrMatrix::from_triplets(2, 2, vec![(0, 1, 3.0)]).expect("csr"));
    let d = Matrix::from(CsrMatrix::from_triplets(2, 3, vec![(0, 1, 2.0)]).expect("csr"));
    assert!(matrix_is_equivalent(&a, &b));
    assert!(!matrix_is_equivalent(&a, &c));
    assert!(!matrix_is_equivalent(&b, &d));
}

#[test]
fn symmetry_dispatches_on_kind() {
    let d = Matrix::from(dense(&[[1.0, 2.0], [2.0 + 1e-10, 3.0]]));
    assert!(is_symmetric(&d, SYMMETRY_TOL));
    let d = Matrix::from(dense(&[[1.0, 2.0], [2.5, 3.0]]));
    assert!(!is_symmetric(&d, SYMMETRY_TOL));
}

#[test]
fn sparse_symmetry_reads_stored_entries() {
    let sym = CsrMatrix::from_triplets(
        3,
        3,
        vec![(0, 2, 1.5), (2, 0, 1.5), (1, 1, 4.0)],
    )
    .expect("csr");
    assert!(is_symmetric(&Matrix::from(sym), SYMMETRY_TOL));

    let one_sided = CsrMatrix::from_triplets(3, 3, vec![(0, 2, 1.5)]).expect("csr");
    assert!(!is_symmetric(&Matrix::from(one_sided), SYMMETRY_TOL));

    let skewed = CsrMatrix::from_triplets(2, 2, vec![(0, 1, 1.0), (1, 0, 1.1)]).expect("csr");
    assert!(!is_symmetric(&Matrix::from(skewed), SYMMETRY_TOL));

    let rect = CsrMatrix::from_triplets(2, 3, vec![]).expect("csr");
    assert!(!is_symmetric(&Matrix::from(rect), SYMMETRY_TOL));
}

#[test]
fn sparse_symmetry_scales_with_nonzeros() {
    // A dense copy of this would need 10^10 cells.
    let n = 100_000;
    let entries: Vec<(u32, u32, f64)> = (0..n as u32).map(|i| (i, n as u32 - 1 - i, 1.0)).collect();
    let m = CsrMatrix::from_triplets(n, n, entries).expect("csr");
    assert!(is_symmetric(&Matrix::from(m), SYMMETRY_TOL));
}
