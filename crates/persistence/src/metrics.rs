//! Database metrics collection.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Records the duration of a named query.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Records connection pool gauges. Call periodically to track pool health.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times a database operation and records its duration.
///
/// ```ignore
/// let timer = QueryTimer::new("find_device_by_id");
/// let result = sqlx::query_as::<_, DeviceEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    /// Creates a new timer for the given query name.
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Records the elapsed duration.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(&self.query_name, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_creation() {
        let timer = QueryTimer::new("test_query");
        assert_eq!(timer.query_name, "test_query");
    }
}
