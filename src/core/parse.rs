//! Parsing one input line into an integer list.

use std::fmt;

/// A non-blank line contained a token that is not a base-10 integer.
///
/// Invalid lines are an expected, routinely-occurring input, so this is a
/// plain result value rather than a panic or an opaque error chain. The
/// caller logs it and skips the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    /// The first token that failed to parse. Empty when consecutive spaces
    /// produced an empty token.
    pub token: String,
}

impl fmt::Display for InvalidLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid integer token '{}'", self.token)
    }
}

impl std::error::Error for InvalidLine {}

/// Parse a trimmed, non-empty line of single-space-separated integers.
///
/// Every token must parse as a signed base-10 integer (`-` sign allowed).
/// If any token fails there is no partial result: the whole line is invalid.
/// Consecutive spaces yield an empty token, which fails to parse, so such
/// lines are invalid rather than shorter lists.
pub fn parse_line(line: &str) -> Result<Vec<i64>, InvalidLine> {
    line.split(' ')
        .map(|token| {
            token.parse::<i64>().map_err(|_| InvalidLine {
                token: token.to_string(),
            })
        })
        .collect()
}
