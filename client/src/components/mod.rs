//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the map surface while reading or
//! writing shared state from Leptos context providers.

pub mod building_select;
pub mod edge_list;
pub mod map_view;
pub mod nav_bar;
pub mod notice;
