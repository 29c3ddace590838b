//! Device registration handlers.

use axum::{extract::State, Json};
use validator::Validate;

use domain::models::device::{RegisterDeviceRequest, RegisterDeviceResponse};
use domain::services::registry;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::record_device_registered;

/// Registers a device, or returns the existing one when the same owner
/// already registered this name.
pub async fn register_device(
    State(state): State<AppState>,
    Json(request): Json<RegisterDeviceRequest>,
) -> Result<Json<RegisterDeviceResponse>, ApiError> {
    request.validate()?;

    let device = registry::register_device(
        state.store.as_ref(),
        request.user_id,
        &request.device_name,
        &request.device_type,
    )
    .await?;

    record_device_registered();

    Ok(Json(device.into()))
}
