//! Location repository for database operations.

use chrono::{DateTime, Utc};
use domain::models::NewLocationSample;
use sqlx::PgPool;

use crate::entities::LocationEntity;
use crate::metrics::QueryTimer;

/// Query parameters for paging through a device's location history.
#[derive(Debug, Clone)]
pub struct LocationHistoryQuery {
    pub device_id: i64,
    pub cursor_recorded_at: Option<DateTime<Utc>>,
    pub cursor_id: Option<i64>,
    pub limit: i64,
}

/// Repository for location-related database operations.
#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    /// Creates a new LocationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one sample to a device's history.
    pub async fn insert_sample(
        &self,
        sample: &NewLocationSample,
    ) -> Result<LocationEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_location_sample");
        let result = sqlx::query_as::<_, LocationEntity>(
            r#"
            INSERT INTO locations (device_id, latitude, longitude, ip_address,
                                   city, region, country, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, device_id, latitude, longitude, ip_address,
                      city, region, country, recorded_at
            "#,
        )
        .bind(sample.device_id)
        .bind(sample.latitude)
        .bind(sample.longitude)
        .bind(&sample.metadata.ip_address)
        .bind(&sample.metadata.city)
        .bind(&sample.metadata.region)
        .bind(&sample.metadata.country)
        .bind(sample.recorded_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// One page of history, most recent first.
    ///
    /// Fetches `limit + 1` rows; the extra row only signals that another
    /// page exists and is not returned.
    pub async fn history(
        &self,
        query: &LocationHistoryQuery,
    ) -> Result<(Vec<LocationEntity>, bool), sqlx::Error> {
        let timer = QueryTimer::new("location_history");
        let result = sqlx::query_as::<_, LocationEntity>(
            r#"
            SELECT id, device_id, latitude, longitude, ip_address,
                   city, region, country, recorded_at
            FROM locations
            WHERE device_id = $1
              AND ($2::timestamptz IS NULL OR (recorded_at, id) < ($2, $3))
            ORDER BY recorded_at DESC, id DESC
            LIMIT $4
            "#,
        )
        .bind(query.device_id)
        .bind(query.cursor_recorded_at)
        .bind(query.cursor_id.unwrap_or(0))
        .bind(query.limit + 1)
        .fetch_all(&self.pool)
        .await;
        timer.record();

        let mut rows = result?;
        let has_more = rows.len() as i64 > query.limit;
        rows.truncate(query.limit as usize);
        Ok((rows, has_more))
    }
}
