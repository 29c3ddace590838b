//! Device entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the devices table.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceEntity {
    pub id: i64,
    pub user_id: i64,
    pub device_name: String,
    pub device_type: String,
    pub registered_at: DateTime<Utc>,
}

impl From<DeviceEntity> for domain::models::Device {
    fn from(entity: DeviceEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            device_name: entity.device_name,
            device_type: entity.device_type,
            registered_at: entity.registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_converts_to_domain_model() {
        let entity = DeviceEntity {
            id: 4,
            user_id: 2,
            device_name: "phone".to_string(),
            device_type: "Phone".to_string(),
            registered_at: Utc::now(),
        };
        let device: domain::models::Device = entity.clone().into();
        assert_eq!(device.id, 4);
        assert_eq!(device.user_id, 2);
        assert_eq!(device.device_name, "phone");
        assert_eq!(device.registered_at, entity.registered_at);
    }
}
