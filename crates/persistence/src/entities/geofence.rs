//! Geofence entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the geofences table.
#[derive(Debug, Clone, FromRow)]
pub struct GeofenceEntity {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl From<GeofenceEntity> for domain::models::Geofence {
    fn from(entity: GeofenceEntity) -> Self {
        Self {
            id: entity.id,
            device_id: entity.device_id,
            name: entity.name,
            latitude: entity.latitude,
            longitude: entity.longitude,
            radius_km: entity.radius_km,
        }
    }
}
