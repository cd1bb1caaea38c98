//! Writing sorted integer lists to the output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Render a list as its elements joined by `", "` inside square brackets.
///
/// An empty list renders as `[]`.
pub fn format_list(values: &[i64]) -> String {
    let joined = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Write one formatted line per list to `path`, creating or truncating it.
///
/// Returns `Err` when the file cannot be created or a write fails; the caller
/// logs that once. The handle is scoped to this function and released on all
/// paths, including errors.
pub fn write_lists(path: &Path, lists: &[Vec<i64>]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for list in lists {
        writeln!(out, "{}", format_list(list))
            .with_context(|| format!("write {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
