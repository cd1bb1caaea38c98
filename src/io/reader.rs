//! Reading integer lists from the input file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::parse::parse_line;

/// Read integer lists from `path`, one list per non-blank line, in file order.
///
/// Returns `Err` only when the file cannot be opened; the caller logs that
/// once and continues with an empty collection. Within the file, blank lines
/// are skipped silently, invalid lines are logged and skipped, and a mid-file
/// read error stops reading and returns the lists parsed so far. A partial or
/// empty result is a valid outcome.
pub fn read_lists(path: &Path) -> Result<Vec<Vec<i64>>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;

    let mut lists = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("stopped reading {} at line {}: {}", path.display(), index + 1, err);
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_line(trimmed) {
            Ok(values) => lists.push(values),
            Err(err) => warn!("skipping line {}: {}", index + 1, err),
        }
    }
    Ok(lists)
}
