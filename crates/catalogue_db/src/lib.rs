//! Astro Catalogue Database Layer
//!
//! A thin repository over the `astro_catalogue` table, which stores the names of
//! celestial bodies. Three operations are exposed: list every row, look a row up
//! by case-insensitive regex on its name, and insert a new name.
//!
//! # Architecture
//!
//! The caller owns the connection pool and hands it to the repository. The
//! repository issues one statement per call and never closes the pool.
//! Uniqueness of names and concurrent inserts are left to the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalogue_db::{create_pool, run_migrations, AstroCatalogueRepository, DatabaseConfig};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//!
//! let repo = AstroCatalogueRepository::new(pool);
//! if repo.insert("Mars").await.is_success() {
//!     let mars = repo.find_by_name("mars").await?;
//! }
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::{AstroCatalogueRepository, CatalogueRow, CatalogueStore, InsertOutcome};
