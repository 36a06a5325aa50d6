//! Core domain logic for the people record service.
//! This crate is the single source of truth for query and paging invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::page::{PageRequest, SortDirection, SortField};
pub use model::person::{Person, PersonDraft, PersonId};
pub use repo::person_repo::{
    PersonRepository, RepoError, RepoResult, SqlitePersonRepository,
};
pub use service::person_service::{PersonPage, PersonService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
