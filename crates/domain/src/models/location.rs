//! Location sample domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::violation::GeofenceViolation;

/// A stored location sample. Samples are immutable once stored; a device's
/// history is an append-only sequence ordered by `recorded_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSample {
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

/// Optional network/geo metadata attached to a report. Opaque free text,
/// stored as-is without validation.
#[derive(Debug, Clone, Default)]
pub struct SampleMetadata {
    pub ip_address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Fields for appending a sample to a device's history.
#[derive(Debug, Clone)]
pub struct NewLocationSample {
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub metadata: SampleMetadata,
    pub recorded_at: DateTime<Utc>,
}

/// Request payload for a location report.
///
/// No client timestamp: the ingestor assigns `recorded_at` server-side so
/// clients cannot forge history order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocationRequest {
    pub device_id: i64,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    pub ip_address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl ReportLocationRequest {
    /// Splits off the opaque metadata fields.
    pub fn metadata(&self) -> SampleMetadata {
        SampleMetadata {
            ip_address: self.ip_address.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
        }
    }
}

/// Response payload for a location report: acceptance plus zero or more
/// violation notices. What the caller does with them (email, log, push) is
/// outside this service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocationResponse {
    pub ok: bool,
    pub violations: Vec<GeofenceViolation>,
}

// ============================================================================
// Location History (GET /api/v1/devices/{device_id}/locations)
// ============================================================================

/// Query parameters for the location history endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLocationHistoryQuery {
    /// Opaque cursor for pagination (base64-encoded timestamp:id).
    pub cursor: Option<String>,

    /// Number of results per page (1-100, default 20).
    pub limit: Option<i32>,
}

impl GetLocationHistoryQuery {
    /// Default page size for history queries.
    pub const DEFAULT_LIMIT: i32 = 20;
    /// Maximum page size for history queries.
    pub const MAX_LIMIT: i32 = 100;
    /// Minimum page size for history queries.
    pub const MIN_LIMIT: i32 = 1;

    /// Returns the effective limit, clamped to the valid range.
    pub fn effective_limit(&self) -> i32 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(Self::MIN_LIMIT, Self::MAX_LIMIT)
    }
}

/// Single item in a history response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationHistoryItem {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<LocationSample> for LocationHistoryItem {
    fn from(sample: LocationSample) -> Self {
        Self {
            id: sample.id,
            latitude: sample.latitude,
            longitude: sample.longitude,
            ip_address: sample.ip_address,
            city: sample.city,
            region: sample.region,
            country: sample.country,
            recorded_at: sample.recorded_at,
        }
    }
}

/// Pagination info for cursor-based pagination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Cursor for fetching the next page.
    pub next_cursor: Option<String>,
    /// Whether more results are available.
    pub has_more: bool,
}

/// Response payload for the history endpoint, most-recent-first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationHistoryResponse {
    pub locations: Vec<LocationHistoryItem>,
    pub pagination: PaginationInfo,
}
