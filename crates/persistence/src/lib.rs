//! Persistence layer for the Device Tracker backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The PostgreSQL `TrackerStore` adapter used by the domain services

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod store;

pub use store::PgTrackerStore;
