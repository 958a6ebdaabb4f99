//! Local UI chrome state (cursor readout).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the page states so the
//! map and the edge list can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Campus-grid coordinates under the pointer, when it is over the map.
    pub cursor: Option<(f64, f64)>,
}

impl UiState {
    /// Cursor readout text, e.g. `"1234, 567"`.
    #[must_use]
    pub fn cursor_label(&self) -> String {
        match self.cursor {
            Some((x, y)) => format!("{x:.0}, {y:.0}"),
            None => "-".to_owned(),
        }
    }
}
