//! Draw-state controller for one line-mapper session.
//!
//! DESIGN
//! ======
//! [`DrawState`] is plain data with three transitions (edit, draw, clear). It
//! has a single reachable state: a failed draw is reported through the
//! returned `Result` and is not stored.
//!
//! [`DrawController`] pairs a state with a [`SegmentSink`] and performs the
//! "commit, then notify" step explicitly: every transition that changes the
//! committed sequence hands the new sequence to the sink. Hosts that already
//! react to state changes (the Leptos client) can hold a bare `DrawState` and
//! watch [`DrawState::revision`] instead.
//!
//! A rejected draw clears the committed sequence so the render surface never
//! shows lines that no longer match the text. The raw text is kept so the user
//! can fix it in place.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::parse::{ParseFailure, parse_with};
use crate::segment::{CoordBounds, Segment};

/// Receives the committed sequence after each change.
pub trait SegmentSink {
    fn commit(&mut self, segments: &[Segment]);
}

impl<F: FnMut(&[Segment])> SegmentSink for F {
    fn commit(&mut self, segments: &[Segment]) {
        self(segments);
    }
}

/// Session-lifetime text buffer and committed segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawState {
    raw_text: String,
    committed: Vec<Segment>,
    revision: u64,
    bounds: CoordBounds,
}

impl DrawState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session that validates against `bounds`.
    #[must_use]
    pub fn with_bounds(bounds: CoordBounds) -> Self {
        Self { bounds, ..Self::default() }
    }

    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[must_use]
    pub fn committed(&self) -> &[Segment] {
        &self.committed
    }

    /// Bumped every time `committed` is replaced or cleared.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn bounds(&self) -> CoordBounds {
        self.bounds
    }

    /// Replace the text buffer. Committed segments are untouched.
    pub fn on_text_edit(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
    }

    /// Parse the buffer and commit the result.
    ///
    /// # Errors
    ///
    /// Returns the parse failure after clearing the committed sequence. The
    /// text buffer is left as-is.
    pub fn on_draw_requested(&mut self) -> Result<&[Segment], ParseFailure> {
        match parse_with(&self.raw_text, &self.bounds) {
            Ok(segments) => {
                tracing::debug!(count = segments.len(), "edge list committed");
                self.replace_committed(segments);
                Ok(&self.committed)
            }
            Err(failure) => {
                tracing::warn!(line = failure.line_number, error = %failure.failure, "edge list rejected");
                self.replace_committed(Vec::new());
                Err(failure)
            }
        }
    }

    /// Reset both the text buffer and the committed sequence.
    pub fn on_clear_requested(&mut self) {
        tracing::debug!("edge list cleared");
        self.raw_text.clear();
        self.replace_committed(Vec::new());
    }

    fn replace_committed(&mut self, segments: Vec<Segment>) {
        self.committed = segments;
        self.revision = self.revision.wrapping_add(1);
    }
}

/// A [`DrawState`] wired to a render sink.
#[derive(Debug)]
pub struct DrawController<S> {
    state: DrawState,
    sink: S,
}

impl<S: SegmentSink> DrawController<S> {
    pub fn new(sink: S) -> Self {
        Self { state: DrawState::new(), sink }
    }

    pub fn with_bounds(sink: S, bounds: CoordBounds) -> Self {
        Self { state: DrawState::with_bounds(bounds), sink }
    }

    #[must_use]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Text edits never reach the sink.
    pub fn on_text_edit(&mut self, text: impl Into<String>) {
        self.state.on_text_edit(text);
    }

    /// Draw, then push whatever is now committed to the sink.
    ///
    /// # Errors
    ///
    /// Returns the parse failure; the sink has already received the empty
    /// sequence by then.
    pub fn on_draw_requested(&mut self) -> Result<usize, ParseFailure> {
        let outcome = self.state.on_draw_requested().map(<[Segment]>::len);
        self.sink.commit(self.state.committed());
        outcome
    }

    pub fn on_clear_requested(&mut self) {
        self.state.on_clear_requested();
        self.sink.commit(self.state.committed());
    }
}
