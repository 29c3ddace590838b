//! Geofence repository for database operations.

use domain::models::NewGeofence;
use sqlx::PgPool;

use crate::entities::GeofenceEntity;
use crate::metrics::QueryTimer;

/// Repository for geofence-related database operations.
#[derive(Clone)]
pub struct GeofenceRepository {
    pool: PgPool,
}

impl GeofenceRepository {
    /// Creates a new GeofenceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new geofence.
    pub async fn insert(&self, geofence: &NewGeofence) -> Result<GeofenceEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_geofence");
        let result = sqlx::query_as::<_, GeofenceEntity>(
            r#"
            INSERT INTO geofences (device_id, name, latitude, longitude, radius_km)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, device_id, name, latitude, longitude, radius_km
            "#,
        )
        .bind(geofence.device_id)
        .bind(&geofence.name)
        .bind(geofence.latitude)
        .bind(geofence.longitude)
        .bind(geofence.radius_km)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All geofences configured for a device.
    pub async fn find_by_device_id(
        &self,
        device_id: i64,
    ) -> Result<Vec<GeofenceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_geofences_by_device");
        let result = sqlx::query_as::<_, GeofenceEntity>(
            r#"
            SELECT id, device_id, name, latitude, longitude, radius_km
            FROM geofences
            WHERE device_id = $1
            ORDER BY id
            "#,
        )
        .bind(device_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
