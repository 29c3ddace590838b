//! Storage abstraction for the tracking core.
//!
//! The services operate against this trait rather than a concrete database,
//! so the evaluator and ingestor stay testable without a live store. The
//! PostgreSQL implementation lives in the `persistence` crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{
    Device, Geofence, LocationSample, NewDevice, NewGeofence, NewLocationSample,
};

/// Error surfaced when the persistent store fails an operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying backend rejected or failed the operation. The core
    /// never retries internally; retry policy belongs to the caller.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A bounded, most-recent-first history page request.
#[derive(Debug, Clone)]
pub struct HistoryRequest {
    pub device_id: i64,
    /// Resume after this `(recorded_at, id)` position, exclusive.
    pub cursor: Option<(DateTime<Utc>, i64)>,
    pub limit: i64,
}

/// Persistent store for devices, location history, and geofences.
///
/// Writes are atomic from the caller's point of view: a failed append
/// leaves no history row behind.
#[async_trait]
pub trait TrackerStore: Send + Sync {
    /// Looks up a device by id.
    async fn find_device(&self, device_id: i64) -> Result<Option<Device>, StoreError>;

    /// Looks up a device by owner and display name.
    async fn find_device_by_name(
        &self,
        user_id: i64,
        device_name: &str,
    ) -> Result<Option<Device>, StoreError>;

    /// Inserts a device row and returns it with its assigned id.
    ///
    /// The store enforces `(user_id, device_name)` uniqueness: when the
    /// owner already has a device with this name, the existing row is
    /// returned instead of a duplicate. This holds under concurrent
    /// callers, where a prior `find_device_by_name` may have raced past
    /// another registration.
    async fn create_device(&self, device: NewDevice) -> Result<Device, StoreError>;

    /// Appends a sample to a device's location history.
    async fn append_sample(&self, sample: NewLocationSample)
        -> Result<LocationSample, StoreError>;

    /// Returns every geofence configured for a device.
    async fn geofences_for_device(&self, device_id: i64) -> Result<Vec<Geofence>, StoreError>;

    /// Inserts a geofence row and returns it with its assigned id.
    async fn create_geofence(&self, geofence: NewGeofence) -> Result<Geofence, StoreError>;

    /// Returns one page of history, most recent first, plus a flag telling
    /// whether more rows exist beyond the page.
    async fn location_history(
        &self,
        request: HistoryRequest,
    ) -> Result<(Vec<LocationSample>, bool), StoreError>;
}
