//! Domain model for person records and page requests.
//!
//! # Responsibility
//! - Define the canonical record shape persisted in the `person` table.
//! - Normalize caller-supplied paging/sorting input into closed sets.
//!
//! # Invariants
//! - `PersonId` is storage-assigned and never reused.
//! - Sort field/direction always resolve to a member of a fixed allow-list.

pub mod page;
pub mod person;
