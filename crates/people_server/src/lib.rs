//! REST boundary for the people record service.
//!
//! Maps the `/api/persons` surface onto `people_core` and owns the
//! process-level lifecycle of the storage connection.

pub mod api;
pub mod config;
pub mod error;
