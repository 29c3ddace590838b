//! Geofence violation model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The transient result of a sample falling strictly outside a geofence's
/// radius. Produced fresh on every evaluation and handed to the caller as
/// an alerting signal; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceViolation {
    pub device_id: i64,
    pub device_name: String,
    pub geofence_name: String,
    pub distance_km: f64,
    pub evaluated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_serialization() {
        let violation = GeofenceViolation {
            device_id: 3,
            device_name: "work-laptop".to_string(),
            geofence_name: "Home".to_string(),
            distance_km: 111.19,
            evaluated_at: Utc::now(),
        };
        let json = serde_json::to_string(&violation).unwrap();
        assert!(json.contains("\"deviceId\":3"));
        assert!(json.contains("\"geofenceName\":\"Home\""));
        assert!(json.contains("\"distanceKm\":111.19"));
    }
}
