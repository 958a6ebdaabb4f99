//! Client-side reactive state modules.
//!
//! DESIGN
//! ======
//! Each page owns one plain-data state struct; `App` wraps them in
//! `RwSignal`s and provides them as context. Keeping the structs free of
//! signals lets their transitions be tested natively.

pub mod lines;
pub mod paths;
pub mod ui;
