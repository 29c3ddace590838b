use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain::services::ingestor::IngestError;
use domain::services::registry::GeofenceError;
use domain::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Device not found: {0}")]
    DeviceNotFound(i64),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid geofence: {0}")]
    InvalidGeofence(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::DeviceNotFound(id) => (
                StatusCode::NOT_FOUND,
                "device_not_found",
                format!("Device {} is not registered", id),
            ),
            ApiError::InvalidCoordinates(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_coordinates", msg.clone())
            }
            ApiError::InvalidGeofence(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_geofence", msg.clone())
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    "A storage error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::DeviceNotFound(id) => ApiError::DeviceNotFound(id),
            IngestError::InvalidCoordinates { .. } => {
                ApiError::InvalidCoordinates(err.to_string())
            }
            IngestError::Storage(e) => ApiError::Storage(e.to_string()),
        }
    }
}

impl From<GeofenceError> for ApiError {
    fn from(err: GeofenceError) -> Self {
        match err {
            GeofenceError::DeviceNotFound(id) => ApiError::DeviceNotFound(id),
            GeofenceError::InvalidCoordinates { .. } | GeofenceError::InvalidRadius(_) => {
                ApiError::InvalidGeofence(err.to_string())
            }
            GeofenceError::Storage(e) => ApiError::Storage(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let detail = e.message.clone().map(|m| m.to_string()).unwrap_or_default();
                    format!("{}: {}", field, detail)
                })
            })
            .collect();

        let message = if messages.len() == 1 {
            messages[0].clone()
        } else {
            messages.join("; ")
        };

        ApiError::Validation(message)
    }
}
