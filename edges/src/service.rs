//! Wire types for the external campus routing service.
//!
//! The service answers two routes:
//!
//! - `GET /buildings` → `{"CSE": "Paul G. Allen Center for Computer Science & Engineering", ...}`
//! - `GET /path?start=CSE&end=CS2` → `{"start": {...}, "cost": 123.4, "path": [{"start": {...}, "end": {...}, "cost": 1.2}, ...]}`
//!
//! Path output crosses a trust boundary in the other direction from typed
//! input: it is converted to [`Segment`]s verbatim, without bound checks.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Route listing building short names and display names.
pub const BUILDINGS_ROUTE: &str = "/buildings";

/// Route computing a shortest path between two buildings.
pub const PATH_ROUTE: &str = "/path";

/// Color used for service paths; the service does not supply one.
pub const DEFAULT_PATH_COLOR: &str = "red";

/// Initial start building in the campus-paths selectors.
pub const DEFAULT_START: &str = "CSE";

/// Initial end building in the campus-paths selectors.
pub const DEFAULT_END: &str = "CS2";

/// Short building code → display name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingMap(pub BTreeMap<String, String>);

impl BuildingMap {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, short_name: &str) -> bool {
        self.0.contains_key(short_name)
    }

    /// Display name for a short code, if known.
    #[must_use]
    pub fn long_name(&self, short_name: &str) -> Option<&str> {
        self.0.get(short_name).map(String::as_str)
    }

    /// `(short, long)` pairs ordered by display name, then short code.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// A location in campus-grid units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One hop of a computed path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub cost: f64,
}

/// Body of a `GET /path` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResponse {
    pub start: Point,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub path: Vec<PathSegment>,
}

impl PathResponse {
    /// Convert every hop to a drawable segment, in path order.
    #[must_use]
    pub fn segments(&self, color: &str) -> Vec<Segment> {
        self.path
            .iter()
            .map(|hop| Segment::new(hop.start.x, hop.start.y, hop.end.x, hop.end.y, color))
            .collect()
    }

    /// Whether the path has no hops (start and end are the same building).
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.path.is_empty()
    }
}
