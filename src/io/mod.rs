//! I/O helpers for the sort pipeline.

pub mod reader;
pub mod writer;
