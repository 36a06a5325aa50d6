//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate page/sort/search input into safe, parameterized SQL.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `ORDER BY` text comes only from `SortField::as_sql` and
//!   `SortDirection::as_sql`; size, offset, and search patterns are
//!   always bound parameters.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Update/delete of a missing id is a no-op, mirroring relational
//!   "0 rows affected" semantics.

use crate::db::DbError;
use crate::model::page::PageRequest;
use crate::model::person::{Person, PersonDraft, PersonId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PERSON_SELECT_SQL: &str = "SELECT id, name, age, email FROM person";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "age", "email"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for person persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not bootstrapped: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for person CRUD, paging, and search.
pub trait PersonRepository {
    /// Returns one page of records in resolved sort order.
    ///
    /// Pages past the data's extent yield an empty vec, never an error.
    fn list(&self, page: &PageRequest) -> RepoResult<Vec<Person>>;

    /// Total number of records, ignoring paging/sort/search.
    fn count(&self) -> RepoResult<u64>;

    /// Same paging/sort contract as [`list`](Self::list), filtered to
    /// records where `term` is a case-insensitive substring of `name`,
    /// `email`, or the decimal text rendering of `age`.
    ///
    /// Callers route here only with a non-empty term.
    fn search(&self, term: &str, page: &PageRequest) -> RepoResult<Vec<Person>>;

    /// Count of records matching the same tri-field predicate as
    /// [`search`](Self::search).
    fn search_count(&self, term: &str) -> RepoResult<u64>;

    /// Single-record lookup. Absent is `Ok(None)`, never an error.
    fn get(&self, id: PersonId) -> RepoResult<Option<Person>>;

    /// Inserts a record; storage assigns and returns the identifier.
    fn create(&self, draft: &PersonDraft) -> RepoResult<PersonId>;

    /// Overwrites name/age/email of the record with this id.
    /// No-op when no such record exists.
    fn update(&self, id: PersonId, draft: &PersonDraft) -> RepoResult<()>;

    /// Removes the record with this id. No-op when absent.
    fn delete(&self, id: PersonId) -> RepoResult<()>;
}

/// SQLite-backed person repository.
///
/// Stateless per call: each operation is one round trip on the borrowed
/// connection, with no locks or caches held between calls.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a bootstrapped connection after verifying its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not
    ///   match the latest migration this binary knows.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the
    ///   `person` table shape is not usable.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = crate::db::migrations::latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'person'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("person"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('person');")?;
        let mut rows = stmt.query([])?;
        let mut columns = Vec::new();
        while let Some(row) = rows.next()? {
            columns.push(row.get::<_, String>(0)?);
        }
        for &required in REQUIRED_COLUMNS {
            if !columns.iter().any(|column| column == required) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "person",
                    column: required,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn list(&self, page: &PageRequest) -> RepoResult<Vec<Person>> {
        let sql = format!(
            "{PERSON_SELECT_SQL} ORDER BY {} {} LIMIT ?1 OFFSET ?2",
            page.sort_field.as_sql(),
            page.sort_direction.as_sql(),
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![page.size, page.offset()])?;
        collect_people(&mut rows)
    }

    fn count(&self) -> RepoResult<u64> {
        let total =
            self.conn
                .query_row("SELECT COUNT(*) FROM person", [], |row| row.get::<_, u64>(0))?;
        Ok(total)
    }

    fn search(&self, term: &str, page: &PageRequest) -> RepoResult<Vec<Person>> {
        let pattern = like_pattern(term);
        let sql = format!(
            "{PERSON_SELECT_SQL}
             WHERE LOWER(name) LIKE ?1
                OR LOWER(email) LIKE ?2
                OR CAST(age AS TEXT) LIKE ?3
             ORDER BY {} {} LIMIT ?4 OFFSET ?5",
            page.sort_field.as_sql(),
            page.sort_direction.as_sql(),
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![
            pattern,
            pattern,
            pattern,
            page.size,
            page.offset()
        ])?;
        collect_people(&mut rows)
    }

    fn search_count(&self, term: &str) -> RepoResult<u64> {
        let pattern = like_pattern(term);
        let total = self.conn.query_row(
            "SELECT COUNT(*) FROM person
             WHERE LOWER(name) LIKE ?1
                OR LOWER(email) LIKE ?2
                OR CAST(age AS TEXT) LIKE ?3",
            params![pattern, pattern, pattern],
            |row| row.get::<_, u64>(0),
        )?;
        Ok(total)
    }

    fn get(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }

        Ok(None)
    }

    fn create(&self, draft: &PersonDraft) -> RepoResult<PersonId> {
        self.conn.execute(
            "INSERT INTO person (name, age, email) VALUES (?1, ?2, ?3);",
            params![draft.name, draft.age, draft.email],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: PersonId, draft: &PersonDraft) -> RepoResult<()> {
        // 0 rows affected is not an error here: callers get the same
        // zero-effect contract a bare relational UPDATE gives.
        self.conn.execute(
            "UPDATE person SET name = ?1, age = ?2, email = ?3 WHERE id = ?4;",
            params![draft.name, draft.age, draft.email, id],
        )?;

        Ok(())
    }

    fn delete(&self, id: PersonId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM person WHERE id = ?1;", params![id])?;

        Ok(())
    }
}

/// Substring pattern shared by all three search predicate clauses:
/// the lower-cased term wrapped in wildcards on both sides.
fn like_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}

fn collect_people(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Person>> {
    let mut people = Vec::new();
    while let Some(row) = rows.next()? {
        people.push(parse_person_row(row)?);
    }
    Ok(people)
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let id: i64 = row.get("id")?;
    if id < 0 {
        return Err(RepoError::InvalidData(format!(
            "negative id value `{id}` in person.id"
        )));
    }

    Ok(Person {
        id,
        name: row.get("name")?,
        age: row.get("age")?,
        email: row.get("email")?,
    })
}
