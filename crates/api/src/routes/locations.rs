//! Location report and history handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use domain::models::location::{
    GetLocationHistoryQuery, LocationHistoryItem, LocationHistoryResponse, PaginationInfo,
    ReportLocationRequest, ReportLocationResponse,
};
use domain::store::HistoryRequest;
use domain::store::TrackerStore;
use shared::pagination;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{record_sample_ingested, record_violations_detected};

/// Accepts one location report and returns any geofence violations.
///
/// Coordinate validation lives in the ingestor, so out-of-range input is
/// rejected before anything touches storage.
pub async fn report_location(
    State(state): State<AppState>,
    Json(request): Json<ReportLocationRequest>,
) -> Result<Json<ReportLocationResponse>, ApiError> {
    let violations = state
        .ingestor
        .ingest(
            request.device_id,
            request.latitude,
            request.longitude,
            request.metadata(),
        )
        .await?;

    record_sample_ingested();
    if !violations.is_empty() {
        record_violations_detected(violations.len());
    }

    Ok(Json(ReportLocationResponse {
        ok: true,
        violations,
    }))
}

/// Returns one page of a device's location history, most recent first.
pub async fn get_location_history(
    State(state): State<AppState>,
    Path(device_id): Path<i64>,
    Query(query): Query<GetLocationHistoryQuery>,
) -> Result<Json<LocationHistoryResponse>, ApiError> {
    state
        .store
        .find_device(device_id)
        .await?
        .ok_or(ApiError::DeviceNotFound(device_id))?;

    let cursor = match &query.cursor {
        Some(raw) => Some(
            pagination::decode_cursor(raw)
                .map_err(|e| ApiError::Validation(format!("Invalid cursor: {}", e)))?,
        ),
        None => None,
    };
    let limit = query.effective_limit() as i64;

    let (samples, has_more) = state
        .store
        .location_history(HistoryRequest {
            device_id,
            cursor,
            limit,
        })
        .await?;

    let next_cursor = if has_more {
        samples
            .last()
            .map(|s| pagination::encode_cursor(s.recorded_at, s.id))
    } else {
        None
    };

    let locations: Vec<LocationHistoryItem> = samples.into_iter().map(Into::into).collect();

    Ok(Json(LocationHistoryResponse {
        locations,
        pagination: PaginationInfo {
            next_cursor,
            has_more,
        },
    }))
}
