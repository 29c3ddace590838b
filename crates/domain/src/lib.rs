//! Domain layer for the Device Tracker backend.
//!
//! This crate contains:
//! - Domain models (Device, LocationSample, Geofence, GeofenceViolation)
//! - The `TrackerStore` storage abstraction
//! - Core services: geofence evaluation and location ingestion

pub mod models;
pub mod services;
pub mod store;
