//! Geofence domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named circular region associated with a device. A device reporting a
/// position strictly outside the radius triggers a violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geofence {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Fields for inserting a new geofence row.
#[derive(Debug, Clone)]
pub struct NewGeofence {
    pub device_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Request payload for creating a geofence.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGeofenceRequest {
    pub device_id: i64,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(custom(function = "shared::validation::validate_radius_km"))]
    pub radius_km: f64,
}

/// Response payload for geofence operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceResponse {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl From<Geofence> for GeofenceResponse {
    fn from(g: Geofence) -> Self {
        Self {
            id: g.id,
            device_id: g.device_id,
            name: g.name,
            latitude: g.latitude,
            longitude: g.longitude,
            radius_km: g.radius_km,
        }
    }
}

/// Response for listing a device's geofences.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGeofencesResponse {
    pub geofences: Vec<GeofenceResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "deviceId": 12,
            "name": "Home",
            "latitude": 40.0,
            "longitude": -75.0,
            "radiusKm": 0.5
        }"#;
        let request: CreateGeofenceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.device_id, 12);
        assert_eq!(request.name, "Home");
        assert_eq!(request.radius_km, 0.5);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_zero_radius() {
        let request = CreateGeofenceRequest {
            device_id: 1,
            name: "Office".to_string(),
            latitude: 10.0,
            longitude: 10.0,
            radius_km: 0.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_negative_radius() {
        let request = CreateGeofenceRequest {
            device_id: 1,
            name: "Office".to_string(),
            latitude: 10.0,
            longitude: 10.0,
            radius_km: -2.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_coordinates() {
        let request = CreateGeofenceRequest {
            device_id: 1,
            name: "Office".to_string(),
            latitude: 95.0,
            longitude: 10.0,
            radius_km: 1.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_geofence_response_serialization() {
        let response = GeofenceResponse::from(Geofence {
            id: 2,
            device_id: 12,
            name: "Home".to_string(),
            latitude: 40.0,
            longitude: -75.0,
            radius_km: 0.5,
        });
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"name\":\"Home\""));
        assert!(json.contains("\"radiusKm\":0.5"));
        assert!(json.contains("\"deviceId\":12"));
    }
}
