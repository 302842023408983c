//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the catalogue test suite.
//!
//! # Modules
//!
//! - `database`: Throwaway PostgreSQL containers with the schema applied
//! - `fixtures`: Seed data and well-known names
//! - `assertions`: Assertion helpers for catalogue rows

pub mod database;
pub mod fixtures;
pub mod assertions;

pub use database::*;
pub use fixtures::*;
pub use assertions::*;
