use std::path::{Path, PathBuf};

use crate::report::{NormalizeSummary, ReportError};

pub fn write_summary(out_dir: &Path, summary: &NormalizeSummary) -> Result<PathBuf, ReportError> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
