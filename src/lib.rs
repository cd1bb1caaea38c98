//! Line-oriented integer list sorter.
//!
//! Reads whitespace-separated integer lists from `input.txt` (one list per
//! line), sorts each list ascending with insertion sort, and writes one
//! bracketed line per list to `output.txt`. Blank lines are skipped; lines
//! with non-integer tokens are skipped with a logged diagnostic. Read or
//! write failures are logged and never abort the process.
//!
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, sorting).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting filesystem operations (reading the input
//!   file, writing the output file).

pub mod core;
pub mod io;
pub mod logging;
