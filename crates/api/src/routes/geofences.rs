//! Geofence management handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use domain::models::geofence::{CreateGeofenceRequest, GeofenceResponse, ListGeofencesResponse};
use domain::services::registry;
use domain::store::TrackerStore;

use crate::app::AppState;
use crate::error::ApiError;

/// Creates a geofence for a device.
pub async fn create_geofence(
    State(state): State<AppState>,
    Json(request): Json<CreateGeofenceRequest>,
) -> Result<Json<GeofenceResponse>, ApiError> {
    request.validate()?;

    let geofence = registry::add_geofence(
        state.store.as_ref(),
        request.device_id,
        &request.name,
        request.latitude,
        request.longitude,
        request.radius_km,
    )
    .await?;

    Ok(Json(geofence.into()))
}

/// Lists all geofences configured for a device.
pub async fn list_geofences(
    State(state): State<AppState>,
    Path(device_id): Path<i64>,
) -> Result<Json<ListGeofencesResponse>, ApiError> {
    state
        .store
        .find_device(device_id)
        .await?
        .ok_or(ApiError::DeviceNotFound(device_id))?;

    let geofences: Vec<GeofenceResponse> = state
        .store
        .geofences_for_device(device_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let total = geofences.len();
    Ok(Json(ListGeofencesResponse { geofences, total }))
}
