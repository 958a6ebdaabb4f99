//! Single-line validation: raw text → [`Segment`] or [`ValidationFailure`].
//!
//! FORMAT
//! ======
//! A line is exactly five tokens separated by single spaces:
//! `x1 y1 x2 y2 color`. Coordinates must parse as `f64` in full (no numeric
//! prefixes) and fall inside the configured [`CoordBounds`]. The color token
//! is opaque and forwarded verbatim, including the empty string.
//!
//! Irregular whitespace (tabs, doubled or leading spaces) changes the token
//! count and is reported as [`ValidationFailure::WrongFieldCount`].

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::segment::{CoordBounds, Segment};
use crate::{EDGE_FORM, NUM_EDGE_FIELDS};

/// Why a single line was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationFailure {
    /// The line did not split into exactly [`NUM_EDGE_FIELDS`] tokens.
    #[error("expected {expected} fields in the form `{form}`, found {found}: {line:?}", form = EDGE_FORM)]
    WrongFieldCount { line: String, expected: usize, found: usize },
    /// A coordinate token is not a number.
    #[error("coordinate {token:?} is not a number: {line:?}")]
    NotANumber { line: String, token: String },
    /// A coordinate lies outside the configured bound.
    #[error("coordinate {value} is outside the bound [{min}, {max}]: {line:?}")]
    OutOfBounds { line: String, value: f64, min: f64, max: f64 },
}

/// Fieldless tag for a [`ValidationFailure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    WrongFieldCount,
    NotANumber,
    OutOfBounds,
}

impl ValidationFailure {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::WrongFieldCount { .. } => FailureKind::WrongFieldCount,
            Self::NotANumber { .. } => FailureKind::NotANumber,
            Self::OutOfBounds { .. } => FailureKind::OutOfBounds,
        }
    }

    /// The offending line as it was given to the validator.
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            Self::WrongFieldCount { line, .. }
            | Self::NotANumber { line, .. }
            | Self::OutOfBounds { line, .. } => line,
        }
    }
}

/// Validate one line against the default campus-grid bound.
///
/// # Errors
///
/// See [`validate_with`].
pub fn validate(line: &str) -> Result<Segment, ValidationFailure> {
    validate_with(line, &CoordBounds::default())
}

/// Validate one line against `bounds`.
///
/// Checks run in order: token count, then numeric parse of all four
/// coordinates, then bounds. The first failing check decides the error.
///
/// # Errors
///
/// Returns [`ValidationFailure::WrongFieldCount`] when the line does not have
/// exactly five single-space separated tokens,
/// [`ValidationFailure::NotANumber`] for the first non-numeric coordinate, and
/// [`ValidationFailure::OutOfBounds`] for the first coordinate outside `bounds`.
pub fn validate_with(line: &str, bounds: &CoordBounds) -> Result<Segment, ValidationFailure> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != NUM_EDGE_FIELDS {
        return Err(ValidationFailure::WrongFieldCount {
            line: line.to_owned(),
            expected: NUM_EDGE_FIELDS,
            found: tokens.len(),
        });
    }

    let mut coords = [0.0_f64; 4];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        *slot = parse_coord(token).ok_or_else(|| ValidationFailure::NotANumber {
            line: line.to_owned(),
            token: (*token).to_owned(),
        })?;
    }

    if let Some(&value) = coords.iter().find(|v| !bounds.contains(**v)) {
        return Err(ValidationFailure::OutOfBounds {
            line: line.to_owned(),
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }

    let [x1, y1, x2, y2] = coords;
    Ok(Segment::new(x1, y1, x2, y2, tokens[4]))
}

/// Strict float parse. `"NaN"` parses in Rust but is not a usable number.
fn parse_coord(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| !v.is_nan())
}
