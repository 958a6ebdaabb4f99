//! Edge-list model, validation, and draw state for the line mapper.
//!
//! This crate owns everything between the raw text a user types and the
//! ordered list of segments handed to a renderer. It does no I/O: the
//! browser client, the render engine, and the CLI all feed text in and take
//! segments out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`segment`] | `Segment` and the coordinate bound it must respect |
//! | [`validate`] | One raw line → `Segment` or a typed `ValidationFailure` |
//! | [`parse`] | Multi-line text → ordered segments, fail-fast |
//! | [`draw`] | Session draw state, its transitions, and the render sink seam |
//! | [`service`] | Wire types for the external campus routing service |

pub mod draw;
pub mod parse;
pub mod segment;
pub mod service;
pub mod validate;

pub use draw::{DrawController, DrawState, SegmentSink};
pub use parse::{ParseFailure, parse, parse_with};
pub use segment::{CoordBounds, Segment};
pub use validate::{FailureKind, ValidationFailure, validate, validate_with};

/// Number of whitespace-separated fields on one edge line: `x1 y1 x2 y2 color`.
pub const NUM_EDGE_FIELDS: usize = 5;

/// Smallest accepted coordinate, in campus-grid units.
pub const MIN_COORD: f64 = 0.0;

/// Largest accepted coordinate, in campus-grid units.
pub const MAX_COORD: f64 = 4000.0;

/// Human-readable shape of one edge line, used in error messages.
pub const EDGE_FORM: &str = "x1 y1 x2 y2 color";
