//! Device domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered device, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub user_id: i64,
    pub device_name: String,
    pub device_type: String,
    pub registered_at: DateTime<Utc>,
}

/// Fields for inserting a new device row.
#[derive(Debug, Clone)]
pub struct NewDevice {
    pub user_id: i64,
    pub device_name: String,
    pub device_type: String,
    pub registered_at: DateTime<Utc>,
}

/// Request payload for device registration.
///
/// The user id arrives pre-authenticated from the transport layer; this
/// service does not verify credentials.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    pub user_id: i64,

    #[validate(length(min = 1, max = 100, message = "Device name must be 1-100 characters"))]
    pub device_name: String,

    #[validate(length(min = 1, max = 100, message = "Device type must be 1-100 characters"))]
    pub device_type: String,
}

/// Response payload for device registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceResponse {
    pub device_id: i64,
    pub device_name: String,
    pub device_type: String,
    pub registered_at: DateTime<Utc>,
}

impl From<Device> for RegisterDeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            device_id: device.id,
            device_name: device.device_name,
            device_type: device.device_type,
            registered_at: device.registered_at,
        }
    }
}
