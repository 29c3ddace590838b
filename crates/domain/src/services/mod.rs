//! Core services: geofence evaluation, location ingestion, and device and
//! geofence registration.

pub mod evaluator;
pub mod ingestor;
pub mod registry;
