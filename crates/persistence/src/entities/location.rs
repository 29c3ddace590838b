//! Location entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the locations table.
#[derive(Debug, Clone, FromRow)]
pub struct LocationEntity {
    pub id: i64,
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub ip_address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<LocationEntity> for domain::models::LocationSample {
    fn from(entity: LocationEntity) -> Self {
        Self {
            id: entity.id,
            device_id: entity.device_id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            ip_address: entity.ip_address,
            city: entity.city,
            region: entity.region,
            country: entity.country,
            recorded_at: entity.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_converts_to_domain_model() {
        let entity = LocationEntity {
            id: 10,
            device_id: 4,
            latitude: 40.7128,
            longitude: -74.0060,
            ip_address: Some("203.0.113.7".to_string()),
            city: None,
            region: None,
            country: Some("US".to_string()),
            recorded_at: Utc::now(),
        };
        let sample: domain::models::LocationSample = entity.into();
        assert_eq!(sample.id, 10);
        assert_eq!(sample.latitude, 40.7128);
        assert_eq!(sample.ip_address.as_deref(), Some("203.0.113.7"));
        assert!(sample.city.is_none());
    }
}
