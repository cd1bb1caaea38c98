//! Deterministic, pure logic for parsing and sorting integer lists.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod parse;
pub mod sort;
