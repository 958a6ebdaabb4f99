//! Campus-grid rendering engine for the line mapper.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! render surface: fitting the campus grid into the viewport, holding the
//! committed segments, and painting them over a background. The Leptos host
//! only forwards viewport changes and committed segment lists.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Background choice and committed segments in draw order |
//! | [`camera`] | Fit-to-viewport camera and coordinate conversions |
//! | [`render`] | Painting a scene onto a 2D context |
//! | [`consts`] | Shared numeric and style constants |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod render;
pub mod scene;
