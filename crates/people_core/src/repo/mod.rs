//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for person records.
//! - Isolate SQLite query details from service/boundary orchestration.
//!
//! # Invariants
//! - Only allow-list-resolved sort tokens are interpolated into query
//!   text; all other values are bound parameters.
//! - Absent records are `Ok(None)` / zero-effect writes, not errors.

pub mod person_repo;
