//! Database error types
//!
//! Every failure in this crate is returned to the caller as a [`DatabaseError`].
//! Errors coming out of SQLx are classified by PostgreSQL error code so that
//! callers can tell a transient connectivity problem from a bad query.

use thiserror::Error;

/// Errors that can occur during catalogue database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database could not be reached or the connection was lost
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// The lookup pattern is not a valid PostgreSQL regular expression
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// The statement was cancelled, usually by `statement_timeout`
    #[error("Query timed out: {0}")]
    Timeout(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The pool was closed by its owner and will not hand out connections again
    #[error("Connection pool is closed")]
    PoolClosed,
}

impl DatabaseError {
    /// Creates a duplicate entry error
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity
    /// * `field` - The field that caused the duplicate
    /// * `value` - The duplicate value
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogue_db::DatabaseError;
    ///
    /// let error = DatabaseError::duplicate("Catalogue row", "name", "Earth");
    /// assert!(error.to_string().contains("Earth"));
    /// ```
    pub fn duplicate(entity: &str, field: &str, value: impl std::fmt::Display) -> Self {
        DatabaseError::DuplicateEntry(format!(
            "{} with {} '{}' already exists",
            entity, field, value
        ))
    }

    /// Checks if this error is a unique constraint violation
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DatabaseError::DuplicateEntry(_))
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_)
                | DatabaseError::PoolExhausted
                | DatabaseError::PoolClosed
        )
    }

    /// Checks if repeating the same operation later may succeed
    ///
    /// Connectivity problems, pool exhaustion and timeouts are transient.
    /// A closed pool, malformed queries, bad patterns and constraint
    /// violations are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_)
                | DatabaseError::PoolExhausted
                | DatabaseError::Timeout(_)
        )
    }
}

/// Maps SQLx errors to the matching DatabaseError variant
///
/// Database errors are classified by their PostgreSQL SQLSTATE code.
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed => DatabaseError::PoolClosed,
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            sqlx::Error::Configuration(e) => DatabaseError::Configuration(e.to_string()),
            sqlx::Error::Migrate(e) => DatabaseError::MigrationFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(message),
                    Some("2201B") => DatabaseError::InvalidPattern(message),
                    Some("57014") => DatabaseError::Timeout(message),
                    Some(code) if code.starts_with("08") => {
                        DatabaseError::ConnectionFailed(message)
                    }
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        DatabaseError::from(&error)
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(error.to_string())
    }
}

impl From<config::ConfigError> for DatabaseError {
    fn from(error: config::ConfigError) -> Self {
        DatabaseError::Configuration(error.to_string())
    }
}
