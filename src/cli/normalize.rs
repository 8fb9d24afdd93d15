use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::input::delimited::write_dense;
use crate::input::detect::detect_format;
use crate::input::load_matrix;
use crate::input::mtx::write_mtx;
use crate::matrix::Matrix;
use crate::matrix::normalize::row_normalize;
use crate::report::json::write_summary;
use crate::report::{MatrixSummary, NormalizeSummary};

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Matrix file (.mtx, .tsv, .csv, optionally .gz)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Skip writing summary.json
    #[arg(long, default_value_t = false)]
    no_summary: bool,
}

pub fn handle(args: NormalizeArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    let format = detect_format(&args.input)?;
    info!(stage = "load", format = %format, "starting stage");
    let matrix = load_matrix(&args.input)?;
    let (n_rows, n_cols) = matrix.shape();
    info!(
        stage = "load",
        elapsed_ms = start.elapsed().as_millis(),
        n_rows,
        n_cols,
        kind = matrix.kind(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "normalize", "starting stage");
    let normalized = row_normalize(&matrix);
    let fast_path = matches!(normalized, Cow::Borrowed(_));
    info!(
        stage = "normalize",
        elapsed_ms = start.elapsed().as_millis(),
        fast_path,
        "finished stage"
    );

    let out_path = match &*normalized {
        Matrix::Dense(m) => {
            let path = args.out.join("normalized.tsv");
            write_dense(&path, m, b'\t')?;
            path
        }
        Matrix::Sparse(m) => {
            let path = args.out.join("normalized.mtx");
            write_mtx(&path, m)?;
            path
        }
    };
    info!(path = %out_path.to_string_lossy(), "wrote normalized matrix");

    if !args.no_summary {
        let input = MatrixSummary::describe(&args.input, format, &matrix);
        let summary = NormalizeSummary::new(input, &matrix, &out_path);
        let path = write_summary(&args.out, &summary)?;
        info!(path = %path.to_string_lossy(), "wrote summary");
    }
    Ok(())
}
