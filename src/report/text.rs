use crate::report::MatrixSummary;

/// Key/value TSV lines, one field per line.
pub fn render_inspect(summary: &MatrixSummary) -> String {
    let lines = [
        ("path", summary.path.clone()),
        ("format", summary.format.clone()),
        ("kind", summary.kind.clone()),
        ("n_rows", summary.n_rows.to_string()),
        ("n_cols", summary.n_cols.to_string()),
        ("row_normalized", summary.row_normalized.to_string()),
        ("symmetric", summary.symmetric.to_string()),
    ];
    let mut buf = String::new();
    for (k, v) in lines {
        buf.push_str(k);
        buf.push('\t');
        buf.push_str(&v);
        buf.push('\n');
    }
    buf
}
