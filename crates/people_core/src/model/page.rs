//! Page request normalization.
//!
//! # Responsibility
//! - Resolve caller-supplied sort field/direction strings into closed enums.
//! - Carry offset-based paging parameters for repository queries.
//!
//! # Invariants
//! - Only values produced by `SortField::as_sql`/`SortDirection::as_sql`
//!   may ever be interpolated into query text.
//! - Unknown or absent sort input is rewritten to a safe default,
//!   never rejected.

use serde::{Deserialize, Serialize};

/// Columns a caller is allowed to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    Age,
    Email,
}

impl SortField {
    /// Resolves free-text sort input against the allow-list.
    ///
    /// Anything outside `name`/`age`/`email` (case-insensitive), including
    /// empty or absent input, falls back to `Id`.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested.unwrap_or("").trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "age" => Self::Age,
            "email" => Self::Email,
            _ => Self::Id,
        }
    }

    /// Fixed column name safe for direct interpolation into ORDER BY.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Age => "age",
            Self::Email => "email",
        }
    }
}

/// Sort order for list/search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Resolves free-text direction input.
    ///
    /// Empty or absent input means `Ascending`; a case-insensitive `asc`
    /// means `Ascending`; every other value means `Descending`.
    pub fn resolve(requested: Option<&str>) -> Self {
        let requested = requested.unwrap_or("").trim();
        if requested.is_empty() || requested.eq_ignore_ascii_case("asc") {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Fixed keyword safe for direct interpolation into ORDER BY.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// One page worth of query parameters, with sort input already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number. Pages past the data yield empty results.
    pub page: u32,
    /// Maximum number of records per page.
    pub size: u32,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl PageRequest {
    /// Builds a page request, normalizing raw sort input on the way in.
    pub fn new(page: u32, size: u32, sort_field: Option<&str>, sort_direction: Option<&str>) -> Self {
        Self {
            page,
            size,
            sort_field: SortField::resolve(sort_field),
            sort_direction: SortDirection::resolve(sort_direction),
        }
    }

    /// Row offset of the first record on this page.
    ///
    /// Saturates at page 0 so a violated 1-based contract cannot underflow.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Ascending,
        }
    }
}
