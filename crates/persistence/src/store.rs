//! PostgreSQL implementation of the domain's `TrackerStore`.

use async_trait::async_trait;
use domain::models::{
    Device, Geofence, LocationSample, NewDevice, NewGeofence, NewLocationSample,
};
use domain::store::{HistoryRequest, StoreError, TrackerStore};
use sqlx::PgPool;

use crate::repositories::{
    DeviceRepository, GeofenceRepository, LocationHistoryQuery, LocationRepository,
};

/// `TrackerStore` backed by the PostgreSQL repositories.
#[derive(Clone)]
pub struct PgTrackerStore {
    devices: DeviceRepository,
    locations: LocationRepository,
    geofences: GeofenceRepository,
}

impl PgTrackerStore {
    /// Creates a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            devices: DeviceRepository::new(pool.clone()),
            locations: LocationRepository::new(pool.clone()),
            geofences: GeofenceRepository::new(pool),
        }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl TrackerStore for PgTrackerStore {
    async fn find_device(&self, device_id: i64) -> Result<Option<Device>, StoreError> {
        let entity = self.devices.find_by_id(device_id).await.map_err(backend)?;
        Ok(entity.map(Into::into))
    }

    async fn find_device_by_name(
        &self,
        user_id: i64,
        device_name: &str,
    ) -> Result<Option<Device>, StoreError> {
        let entity = self
            .devices
            .find_by_owner_and_name(user_id, device_name)
            .await
            .map_err(backend)?;
        Ok(entity.map(Into::into))
    }

    async fn create_device(&self, device: NewDevice) -> Result<Device, StoreError> {
        if let Some(entity) = self.devices.insert(&device).await.map_err(backend)? {
            return Ok(entity.into());
        }
        // Lost the insert race for (user_id, device_name); the winning row
        // is the device to return.
        let entity = self
            .devices
            .find_by_owner_and_name(device.user_id, &device.device_name)
            .await
            .map_err(backend)?
            .ok_or_else(|| {
                StoreError::Backend(format!(
                    "device ({}, {}) missing after conflicting insert",
                    device.user_id, device.device_name
                ))
            })?;
        Ok(entity.into())
    }

    async fn append_sample(
        &self,
        sample: NewLocationSample,
    ) -> Result<LocationSample, StoreError> {
        let entity = self
            .locations
            .insert_sample(&sample)
            .await
            .map_err(backend)?;
        Ok(entity.into())
    }

    async fn geofences_for_device(&self, device_id: i64) -> Result<Vec<Geofence>, StoreError> {
        let entities = self
            .geofences
            .find_by_device_id(device_id)
            .await
            .map_err(backend)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn create_geofence(&self, geofence: NewGeofence) -> Result<Geofence, StoreError> {
        let entity = self.geofences.insert(&geofence).await.map_err(backend)?;
        Ok(entity.into())
    }

    async fn location_history(
        &self,
        request: HistoryRequest,
    ) -> Result<(Vec<LocationSample>, bool), StoreError> {
        let (cursor_recorded_at, cursor_id) = match request.cursor {
            Some((ts, id)) => (Some(ts), Some(id)),
            None => (None, None),
        };
        let query = LocationHistoryQuery {
            device_id: request.device_id,
            cursor_recorded_at,
            cursor_id,
            limit: request.limit,
        };
        let (entities, has_more) = self.locations.history(&query).await.map_err(backend)?;
        Ok((entities.into_iter().map(Into::into).collect(), has_more))
    }
}
