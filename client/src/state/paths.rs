//! Campus-paths page state: building list, selections, and the drawn route.
//!
//! At most one path request is in flight; `loading` gates the Directions
//! button.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use edges::Segment;
use edges::service::{BuildingMap, DEFAULT_END, DEFAULT_PATH_COLOR, DEFAULT_START, PathResponse};

use crate::net::api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct PathsState {
    pub buildings: BuildingMap,
    pub start: String,
    pub end: String,
    /// Route segments currently drawn, already colored.
    pub path: Vec<Segment>,
    pub path_cost: Option<f64>,
    /// One-line description of the drawn route.
    pub summary: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PathsState {
    fn default() -> Self {
        Self {
            buildings: BuildingMap::default(),
            start: DEFAULT_START.to_owned(),
            end: DEFAULT_END.to_owned(),
            path: Vec::new(),
            path_cost: None,
            summary: None,
            loading: false,
            error: None,
        }
    }
}

impl PathsState {
    pub fn set_buildings(&mut self, buildings: BuildingMap) {
        self.buildings = buildings;
    }

    pub fn select_start(&mut self, code: impl Into<String>) {
        self.start = code.into();
    }

    pub fn select_end(&mut self, code: impl Into<String>) {
        self.end = code.into();
    }

    /// Mark a path request as in flight and return the codes to ask for.
    /// Returns `None` while another request is still pending.
    pub fn begin_request(&mut self) -> Option<(String, String)> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some((self.start.clone(), self.end.clone()))
    }

    /// Apply the outcome of a path request. A failure leaves the previous
    /// route on screen and records the message.
    pub fn finish_request(&mut self, result: Result<PathResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(response) => {
                self.path = response.segments(DEFAULT_PATH_COLOR);
                self.path_cost = Some(response.cost);
                self.summary = Some(self.describe(&response));
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Display name for a building code, falling back to the code itself.
    #[must_use]
    pub fn building_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.buildings.long_name(code).unwrap_or(code)
    }

    fn describe(&self, response: &PathResponse) -> String {
        let start = self.building_name(&self.start);
        if response.is_trivial() {
            return format!("{start} is both the start and the end");
        }
        let end = self.building_name(&self.end);
        let hops = response.path.len();
        format!("{hops} hops from {start} to {end}, cost {:.0}", response.cost)
    }

    pub fn set_error(&mut self, error: &ApiError) {
        self.error = Some(error.to_string());
    }

    /// Drop the drawn route and restore the default selections.
    pub fn reset(&mut self) {
        self.start = DEFAULT_START.to_owned();
        self.end = DEFAULT_END.to_owned();
        self.path.clear();
        self.path_cost = None;
        self.summary = None;
        self.error = None;
    }
}
