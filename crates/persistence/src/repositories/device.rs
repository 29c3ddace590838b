//! Device repository for database operations.

use domain::models::NewDevice;
use sqlx::PgPool;

use crate::entities::DeviceEntity;
use crate::metrics::QueryTimer;

/// Repository for device-related database operations.
#[derive(Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    /// Creates a new DeviceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a device by id.
    pub async fn find_by_id(&self, device_id: i64) -> Result<Option<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_device_by_id");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, user_id, device_name, device_type, registered_at
            FROM devices WHERE id = $1
            "#,
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a device by owner and display name.
    pub async fn find_by_owner_and_name(
        &self,
        user_id: i64,
        device_name: &str,
    ) -> Result<Option<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_device_by_owner_and_name");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, user_id, device_name, device_type, registered_at
            FROM devices WHERE user_id = $1 AND device_name = $2
            "#,
        )
        .bind(user_id)
        .bind(device_name)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new device.
    ///
    /// Returns `None` when another insert won the race for this
    /// `(user_id, device_name)`; the caller re-selects the winning row.
    pub async fn insert(&self, device: &NewDevice) -> Result<Option<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("insert_device");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            INSERT INTO devices (user_id, device_name, device_type, registered_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, device_name) DO NOTHING
            RETURNING id, user_id, device_name, device_type, registered_at
            "#,
        )
        .bind(device.user_id)
        .bind(&device.device_name)
        .bind(&device.device_type)
        .bind(device.registered_at)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
