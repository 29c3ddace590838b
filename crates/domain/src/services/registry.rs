//! Device registration and geofence management.
//!
//! Thin, validated writes on top of the store. Registration is idempotent
//! per `(owner, device name)` so a client that re-registers after a restart
//! gets its existing device id back instead of a duplicate row.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::models::{Device, Geofence, NewDevice, NewGeofence};
use crate::store::{StoreError, TrackerStore};

/// Error taxonomy for geofence creation.
#[derive(Debug, Error)]
pub enum GeofenceError {
    #[error("device {0} not found")]
    DeviceNotFound(i64),

    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("invalid radius {0} km, radius must be positive")]
    InvalidRadius(f64),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Registers a device for a user, reusing the existing row when the owner
/// already has a device with this name.
pub async fn register_device<S: TrackerStore>(
    store: &S,
    user_id: i64,
    device_name: &str,
    device_type: &str,
) -> Result<Device, StoreError> {
    if let Some(existing) = store.find_device_by_name(user_id, device_name).await? {
        info!(
            device_id = existing.id,
            user_id, device_name, "device already registered, returning existing id"
        );
        return Ok(existing);
    }

    let device = store
        .create_device(NewDevice {
            user_id,
            device_name: device_name.to_string(),
            device_type: device_type.to_string(),
            registered_at: Utc::now(),
        })
        .await?;
    info!(device_id = device.id, user_id, device_name, "device registered");
    Ok(device)
}

/// Creates a geofence for a device after validating center and radius.
/// A radius that is zero or negative never reaches storage.
pub async fn add_geofence<S: TrackerStore>(
    store: &S,
    device_id: i64,
    name: &str,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Geofence, GeofenceError> {
    if shared::validation::validate_latitude(latitude).is_err()
        || shared::validation::validate_longitude(longitude).is_err()
    {
        return Err(GeofenceError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    if shared::validation::validate_radius_km(radius_km).is_err() {
        return Err(GeofenceError::InvalidRadius(radius_km));
    }

    store
        .find_device(device_id)
        .await?
        .ok_or(GeofenceError::DeviceNotFound(device_id))?;

    let geofence = store
        .create_geofence(NewGeofence {
            device_id,
            name: name.to_string(),
            latitude,
            longitude,
            radius_km,
        })
        .await?;
    info!(
        geofence_id = geofence.id,
        device_id,
        name,
        radius_km,
        "geofence created"
    );
    Ok(geofence)
}
