//! Test Fixtures
//!
//! Names loaded by `fixtures/seed_planets.sql`, in insertion order.

/// Seed script applied by [`crate::TestDatabase::seed`]
pub const SEED_PLANETS_SQL: &str = include_str!("../../../fixtures/seed_planets.sql");

/// Planets present after seeding; ids are 1, 2 and 3 respectively
pub const SEEDED_PLANETS: [&str; 3] = ["Mercury", "Venus", "Earth"];

/// A planet the seed deliberately leaves out
pub const MARS: &str = "Mars";
