//! Networking modules for the external campus routing service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two REST calls the campus-paths page needs. The wire
//! schema is shared with the CLI through `edges::service`.

pub mod api;
