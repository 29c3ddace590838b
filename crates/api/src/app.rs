use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::ingestor::LocationIngestor;
use persistence::PgTrackerStore;

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{devices, geofences, health, locations};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub store: Arc<PgTrackerStore>,
    pub ingestor: Arc<LocationIngestor<PgTrackerStore>>,
}

/// Parses configured CORS origins, warning about entries that are not
/// valid header values instead of dropping them silently.
fn parse_cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let store = Arc::new(PgTrackerStore::new(pool.clone()));
    let ingestor = Arc::new(LocationIngestor::new(store.clone()));

    let state = AppState {
        pool,
        store,
        ingestor,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins = parse_cors_origins(&config.security.cors_origins);
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Tracking routes, /api/v1 prefix for versioned API
    let api_routes = Router::new()
        .route("/api/v1/devices/register", post(devices::register_device))
        .route("/api/v1/locations", post(locations::report_location))
        .route(
            "/api/v1/devices/:device_id/locations",
            get(locations::get_location_history),
        )
        .route("/api/v1/geofences", post(geofences::create_geofence))
        .route(
            "/api/v1/devices/:device_id/geofences",
            get(geofences::list_geofences),
        );

    // Public operational routes
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cors_origins_keeps_valid_entries() {
        let origins = vec![
            "https://app.example.com".to_string(),
            "http://localhost:3000".to_string(),
        ];
        let parsed = parse_cors_origins(&origins);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], "https://app.example.com");
    }

    #[test]
    fn test_parse_cors_origins_skips_invalid_entries() {
        let origins = vec![
            "https://app.example.com".to_string(),
            "https://bad\norigin".to_string(),
        ];
        let parsed = parse_cors_origins(&origins);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], "https://app.example.com");
    }
}
