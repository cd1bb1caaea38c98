//! Line-oriented integer list sorter.
//!
//! Reads `input.txt` from the working directory, insertion-sorts each line's
//! integers, and writes the results to `output.txt`. No command-line
//! arguments are consulted. Data and I/O problems are logged and the process
//! still exits with status 0.

use std::path::Path;

use tracing::error;

use linesort::core::sort::sort_lists;
use linesort::io::reader::read_lists;
use linesort::io::writer::write_lists;

const INPUT_FILE: &str = "input.txt";
const OUTPUT_FILE: &str = "output.txt";

fn main() {
    linesort::logging::init();

    let lists = match read_lists(Path::new(INPUT_FILE)) {
        Ok(lists) => lists,
        Err(err) => {
            error!("{err:#}");
            Vec::new()
        }
    };

    let sorted = sort_lists(lists);

    if let Err(err) = write_lists(Path::new(OUTPUT_FILE), &sorted) {
        error!("{err:#}");
    }
}
