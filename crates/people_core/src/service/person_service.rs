//! Person use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for boundary callers.
//! - Own the list-vs-search routing rule so the repository never sees
//!   an empty search term.
//!
//! # Invariants
//! - Service APIs never bypass repository query contracts.
//! - Service layer remains storage-agnostic.

use crate::model::page::PageRequest;
use crate::model::person::{Person, PersonDraft, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoResult};

/// One page of results plus the pre-paging total, as the REST boundary
/// reports it (body + `x-total-count` header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonPage {
    pub items: Vec<Person>,
    pub total: u64,
}

/// Use-case service wrapper over a person repository.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetches one page, routing on the search term.
    ///
    /// # Contract
    /// - A present, non-blank term routes to `search`/`search_count`.
    /// - Absent or blank terms route to `list`/`count`.
    pub fn fetch_page(&self, term: Option<&str>, page: &PageRequest) -> RepoResult<PersonPage> {
        match term.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => Ok(PersonPage {
                items: self.repo.search(term, page)?,
                total: self.repo.search_count(term)?,
            }),
            None => Ok(PersonPage {
                items: self.repo.list(page)?,
                total: self.repo.count()?,
            }),
        }
    }

    /// Gets one person by id; absent is `Ok(None)`.
    pub fn get(&self, id: PersonId) -> RepoResult<Option<Person>> {
        self.repo.get(id)
    }

    /// Creates a person and returns the storage-assigned id.
    pub fn create(&self, draft: &PersonDraft) -> RepoResult<PersonId> {
        self.repo.create(draft)
    }

    /// Updates a person's fields; no-op when the id is unknown.
    pub fn update(&self, id: PersonId, draft: &PersonDraft) -> RepoResult<()> {
        self.repo.update(id, draft)
    }

    /// Deletes a person; no-op when the id is unknown.
    pub fn delete(&self, id: PersonId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
