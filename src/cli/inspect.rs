use std::path::PathBuf;

use clap::Args;

use crate::input::detect::detect_format;
use crate::input::load_matrix;
use crate::report::MatrixSummary;
use crate::report::text::render_inspect;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Matrix file (.mtx, .tsv, .csv, optionally .gz)
    #[arg(long)]
    input: PathBuf,
}

pub fn handle(args: InspectArgs) -> anyhow::Result<()> {
    let format = detect_format(&args.input)?;
    let matrix = load_matrix(&args.input)?;
    let summary = MatrixSummary::describe(&args.input, format, &matrix);
    print!("{}", render_inspect(&summary));
    Ok(())
}
