//! Shared utilities for the Device Tracker backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Coordinate and geofence validation
//! - Cursor pagination helpers for location history

pub mod pagination;
pub mod validation;
