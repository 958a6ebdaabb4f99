//! Multi-line parsing: raw edge-list text → ordered [`Segment`]s.
//!
//! Blank lines are skipped. The first invalid line aborts the whole parse and
//! no segments are returned; callers never see a partial list.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use crate::segment::{CoordBounds, Segment};
use crate::validate::{ValidationFailure, validate_with};

/// The first line that failed validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("line {line_number}: {failure}")]
pub struct ParseFailure {
    /// 1-based physical line number in the input text, blank lines included.
    pub line_number: usize,
    /// The validator's failure, unchanged.
    #[source]
    pub failure: ValidationFailure,
}

/// Parse `text` against the default campus-grid bound.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse(text: &str) -> Result<Vec<Segment>, ParseFailure> {
    parse_with(text, &CoordBounds::default())
}

/// Parse `text` line by line, preserving input order.
///
/// Order matters downstream: later segments draw on top of earlier ones.
///
/// # Errors
///
/// Returns a [`ParseFailure`] wrapping the first line's [`ValidationFailure`].
pub fn parse_with(text: &str, bounds: &CoordBounds) -> Result<Vec<Segment>, ParseFailure> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            validate_with(line, bounds).map_err(|failure| ParseFailure { line_number: index + 1, failure })
        })
        .collect()
}
