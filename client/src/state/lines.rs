//! Line-mapper page state: the edge-list buffer and what was last drawn.
//!
//! Wraps `edges::DrawState` so the page reads one signal for the textarea,
//! the committed segments, and the failure banner.

#[cfg(test)]
#[path = "lines_test.rs"]
mod lines_test;

use edges::{DrawState, ParseFailure, Segment};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinesState {
    pub draw: DrawState,
    /// Message from the most recent rejected draw, shown inline.
    pub notice: Option<String>,
}

impl LinesState {
    pub fn edit(&mut self, text: impl Into<String>) {
        self.draw.on_text_edit(text);
    }

    /// Parse the buffer and commit it. On failure the committed list is
    /// emptied and the failure message is kept as the notice.
    ///
    /// # Errors
    ///
    /// Returns the parser's failure for the first invalid line.
    pub fn draw(&mut self) -> Result<usize, ParseFailure> {
        match self.draw.on_draw_requested() {
            Ok(segments) => {
                let count = segments.len();
                self.notice = None;
                Ok(count)
            }
            Err(failure) => {
                self.notice = Some(failure.to_string());
                Err(failure)
            }
        }
    }

    pub fn clear(&mut self) {
        self.draw.on_clear_requested();
        self.notice = None;
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.draw.raw_text()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.draw.committed()
    }
}
