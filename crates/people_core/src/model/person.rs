//! Person domain model.
//!
//! # Responsibility
//! - Define the persisted record and its storage-free draft counterpart.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and immutable thereafter.
//! - Last write wins; there is no version/concurrency token.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the storage engine on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = i64;

/// One persisted person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Storage-assigned, non-negative identifier.
    pub id: PersonId,
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Mutable fields of a person, used for create and update payloads.
///
/// Deliberately has no `id`: callers cannot choose identifiers on create,
/// and updates take the identifier separately from the field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl PersonDraft {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

impl From<&Person> for PersonDraft {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            age: person.age,
            email: person.email.clone(),
        }
    }
}
