//! Astro catalogue repository implementation
//!
//! This module provides database access for the `astro_catalogue` table:
//! listing every celestial body, looking one up by name pattern, and adding
//! new names.
//!
//! # Name lookups
//!
//! Lookups use PostgreSQL's case-insensitive regex operator (`~*`), so the
//! argument is a pattern rather than a literal: `"earth"` matches `Earth`,
//! and `"^m"` matches both `Mercury` and `Mars`. When several rows match,
//! [`AstroCatalogueRepository::find_by_name`] returns the one with the lowest id.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use crate::error::DatabaseError;

const SELECT_ALL: &str = "SELECT * FROM astro_catalogue";

const SELECT_FIRST_BY_NAME: &str =
    "SELECT * FROM astro_catalogue WHERE name ~* $1 ORDER BY id LIMIT 1";

const SELECT_ALL_BY_NAME: &str = "SELECT * FROM astro_catalogue WHERE name ~* $1 ORDER BY id";

const INSERT_NAME: &str = "INSERT INTO astro_catalogue (name) VALUES ($1) RETURNING id";

/// A row of the `astro_catalogue` table
///
/// The default value (`id == 0`, empty name) is what a lookup without a
/// match returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct CatalogueRow {
    pub id: i32,
    pub name: String,
}

impl CatalogueRow {
    /// True for the placeholder row returned when a lookup matched nothing
    pub fn is_empty(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }
}

/// Result of inserting a name into the catalogue
///
/// Converts into `bool` for callers that only care whether a row was created.
#[derive(Debug)]
pub enum InsertOutcome {
    /// The row was created with the given id
    Inserted { id: i32 },
    /// A row with the same name already exists; nothing was written
    DuplicateKey,
    /// The statement failed for any other reason
    ExecutionError(DatabaseError),
}

impl InsertOutcome {
    /// Returns true if a row was created
    pub fn is_success(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }

    /// The id assigned to the new row, if one was created
    pub fn id(&self) -> Option<i32> {
        match self {
            InsertOutcome::Inserted { id } => Some(*id),
            _ => None,
        }
    }

    /// Converts back into a `Result`, with duplicates reported as `DatabaseError::DuplicateEntry`
    pub fn into_result(self, name: &str) -> Result<i32, DatabaseError> {
        match self {
            InsertOutcome::Inserted { id } => Ok(id),
            InsertOutcome::DuplicateKey => Err(DatabaseError::duplicate("Catalogue row", "name", name)),
            InsertOutcome::ExecutionError(e) => Err(e),
        }
    }
}

impl From<Result<i32, DatabaseError>> for InsertOutcome {
    fn from(result: Result<i32, DatabaseError>) -> Self {
        match result {
            Ok(id) => InsertOutcome::Inserted { id },
            Err(e) if e.is_duplicate() => InsertOutcome::DuplicateKey,
            Err(e) => InsertOutcome::ExecutionError(e),
        }
    }
}

impl From<InsertOutcome> for bool {
    fn from(outcome: InsertOutcome) -> Self {
        outcome.is_success()
    }
}

/// Storage port for the catalogue
///
/// Callers that only need list/find/insert should depend on this trait so a
/// different store can be injected.
#[async_trait]
pub trait CatalogueStore: Send + Sync {
    /// Returns every row; order is unspecified
    async fn list_all(&self) -> Result<Vec<CatalogueRow>, DatabaseError>;

    /// Returns the lowest-id row whose name matches `pattern`, or an empty row
    async fn find_by_name(&self, pattern: &str) -> Result<CatalogueRow, DatabaseError>;

    /// Inserts a new name
    async fn insert(&self, name: &str) -> InsertOutcome;
}

/// Repository for the astro catalogue
///
/// Holds a handle to the caller's pool. Cloning the repository is cheap and
/// shares the pool.
#[derive(Debug, Clone)]
pub struct AstroCatalogueRepository {
    pool: PgPool,
}

impl AstroCatalogueRepository {
    /// Creates a new AstroCatalogueRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves every row in the catalogue
    ///
    /// No ordering is applied; callers must not rely on the order of the result.
    /// An empty table yields an empty vector.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<CatalogueRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CatalogueRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed catalogue rows");
        Ok(rows)
    }

    /// Looks up a row by case-insensitive regex match on its name
    ///
    /// # Arguments
    ///
    /// * `pattern` - A PostgreSQL regular expression matched with `~*`
    ///
    /// # Returns
    ///
    /// The matching row with the lowest id, or `CatalogueRow::default()` when
    /// nothing matches
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidPattern` if `pattern` is not a valid regex
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, pattern: &str) -> Result<CatalogueRow, DatabaseError> {
        let row = sqlx::query_as::<_, CatalogueRow>(SELECT_FIRST_BY_NAME)
            .bind(pattern)
            .fetch_optional(&self.pool)
            .await?;

        debug!(found = row.is_some(), "Looked up catalogue row by name");
        Ok(row.unwrap_or_default())
    }

    /// Retrieves every row whose name matches `pattern`, ordered by id
    #[instrument(skip(self))]
    pub async fn find_all_by_name(&self, pattern: &str) -> Result<Vec<CatalogueRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CatalogueRow>(SELECT_ALL_BY_NAME)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Matched catalogue rows by name");
        Ok(rows)
    }

    /// Inserts a new name and reports what happened
    ///
    /// Duplicate names are rejected by the table's unique constraint and
    /// reported as `InsertOutcome::DuplicateKey`; no row is created.
    #[instrument(skip(self))]
    pub async fn insert(&self, name: &str) -> InsertOutcome {
        let outcome = InsertOutcome::from(self.try_insert(name).await);

        match &outcome {
            InsertOutcome::Inserted { id } => debug!(id = *id, "Inserted catalogue row"),
            InsertOutcome::DuplicateKey => warn!("Catalogue row already exists"),
            InsertOutcome::ExecutionError(e) => warn!(error = %e, "Failed to insert catalogue row"),
        }

        outcome
    }

    /// Inserts a new name, returning the generated id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if the name already exists
    pub async fn try_insert(&self, name: &str) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>(INSERT_NAME)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Checks that the database answers a trivial query
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CatalogueStore for AstroCatalogueRepository {
    async fn list_all(&self) -> Result<Vec<CatalogueRow>, DatabaseError> {
        AstroCatalogueRepository::list_all(self).await
    }

    async fn find_by_name(&self, pattern: &str) -> Result<CatalogueRow, DatabaseError> {
        AstroCatalogueRepository::find_by_name(self, pattern).await
    }

    async fn insert(&self, name: &str) -> InsertOutcome {
        AstroCatalogueRepository::insert(self, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_is_empty() {
        let row = CatalogueRow::default();

        assert!(row.is_empty());
        assert_eq!(row.id, 0);
        assert_eq!(row.name, "");
    }

    #[test]
    fn test_stored_row_is_not_empty() {
        let row = CatalogueRow { id: 3, name: "Earth".to_string() };

        assert!(!row.is_empty());
    }

    #[test]
    fn test_insert_outcome_coerces_to_bool() {
        assert!(bool::from(InsertOutcome::Inserted { id: 4 }));
        assert!(!bool::from(InsertOutcome::DuplicateKey));
        assert!(!bool::from(InsertOutcome::ExecutionError(DatabaseError::PoolExhausted)));
    }

    #[test]
    fn test_duplicate_error_becomes_duplicate_key() {
        let outcome = InsertOutcome::from(Err::<i32, _>(DatabaseError::duplicate("Catalogue row", "name", "Earth")));

        assert!(matches!(outcome, InsertOutcome::DuplicateKey));
        assert_eq!(outcome.id(), None);
    }

    #[test]
    fn test_other_errors_become_execution_error() {
        let outcome = InsertOutcome::from(Err::<i32, _>(DatabaseError::QueryFailed("syntax".to_string())));

        assert!(matches!(outcome, InsertOutcome::ExecutionError(DatabaseError::QueryFailed(_))));
    }

    #[test]
    fn test_outcome_round_trips_to_result() {
        assert_eq!(InsertOutcome::Inserted { id: 7 }.into_result("Mars").unwrap(), 7);

        let error = InsertOutcome::DuplicateKey.into_result("Mars").unwrap_err();
        assert!(error.is_duplicate());
        assert!(error.to_string().contains("Mars"));
    }
}
