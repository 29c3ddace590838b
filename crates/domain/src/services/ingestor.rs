//! Location ingestion.
//!
//! One `ingest` call per incoming report: validate, persist, evaluate the
//! device's geofences, and hand the violation list back to the caller. The
//! caller decides what to do with violations; this service only logs them.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::{GeofenceViolation, NewLocationSample, SampleMetadata};
use crate::services::evaluator::{self, DeviceIdentity, SamplePoint};
use crate::store::{StoreError, TrackerStore};

/// Error taxonomy for location ingestion. All errors are detected
/// synchronously; a failed ingest leaves nothing behind.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("device {0} not found")]
    DeviceNotFound(i64),

    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Accepts location reports for registered devices.
///
/// Reports for different devices proceed fully in parallel. Reports for the
/// same device serialize around the history append and the geofence read,
/// so insertion order matches temporal order and every evaluation sees a
/// geofence set that is not mid-update.
pub struct LocationIngestor<S> {
    store: Arc<S>,
    device_locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl<S: TrackerStore> LocationIngestor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            device_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn device_lock(&self, device_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.device_locks.lock().await;
        locks
            .entry(device_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Ingests one location report and returns the geofences it violates.
    ///
    /// Fails fast on bad input: nothing is persisted unless the device
    /// exists and the coordinates are in range.
    pub async fn ingest(
        &self,
        device_id: i64,
        latitude: f64,
        longitude: f64,
        metadata: SampleMetadata,
    ) -> Result<Vec<GeofenceViolation>, IngestError> {
        if shared::validation::validate_latitude(latitude).is_err()
            || shared::validation::validate_longitude(longitude).is_err()
        {
            return Err(IngestError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let device = self
            .store
            .find_device(device_id)
            .await?
            .ok_or(IngestError::DeviceNotFound(device_id))?;

        let lock = self.device_lock(device_id).await;
        let guard = lock.lock().await;

        // Server-assigned timestamp: clients cannot forge history order.
        let recorded_at = Utc::now();
        let sample = self
            .store
            .append_sample(NewLocationSample {
                device_id,
                latitude,
                longitude,
                metadata,
                recorded_at,
            })
            .await?;
        let geofences = self.store.geofences_for_device(device_id).await?;
        drop(guard);

        let identity = DeviceIdentity {
            device_id: device.id,
            device_name: device.device_name,
        };
        let point = SamplePoint {
            latitude,
            longitude,
        };
        let violations = evaluator::evaluate(point, &identity, &geofences, sample.recorded_at);

        for violation in &violations {
            warn!(
                device_id,
                geofence = %violation.geofence_name,
                distance_km = violation.distance_km,
                "device outside geofence"
            );
        }
        debug!(
            device_id,
            latitude,
            longitude,
            violations = violations.len(),
            "location sample ingested"
        );

        Ok(violations)
    }
}
