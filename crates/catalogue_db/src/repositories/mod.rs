//! Repository implementations
//!
//! Repositories own the SQL for a table and map rows to plain record types.
//! Every repository holds a clone of the caller's pool and issues a single
//! statement per operation.

pub mod astro_catalogue;

pub use astro_catalogue::{AstroCatalogueRepository, CatalogueRow, CatalogueStore, InsertOutcome};
