//! Geofence evaluation.
//!
//! Pure computation: given a sample point and the geofences configured for
//! a device, decide which are breached and by how much. No state, no I/O;
//! given validated inputs this module cannot fail.

use chrono::{DateTime, Utc};

use crate::models::{Geofence, GeofenceViolation};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A sample position in decimal degrees.
#[derive(Debug, Clone, Copy)]
pub struct SamplePoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Identity of the device a sample belongs to, resolved by the caller so
/// evaluation never has to query anything.
#[derive(Debug, Clone)]
pub struct DeviceIdentity {
    pub device_id: i64,
    pub device_name: String,
}

/// Great-circle distance between two points in kilometers, via the
/// haversine formula.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding near antipodal points can push `a` just outside [0, 1],
    // which would take sqrt/asin out of their domains.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    c * EARTH_RADIUS_KM
}

/// Returns one violation for every geofence the point lies strictly outside
/// of. A point exactly on the boundary (`distance == radius`) is compliant.
///
/// `evaluated_at` should be the ingestion timestamp of the triggering
/// sample, so the violation and the sample carry the same time.
pub fn evaluate(
    point: SamplePoint,
    identity: &DeviceIdentity,
    geofences: &[Geofence],
    evaluated_at: DateTime<Utc>,
) -> Vec<GeofenceViolation> {
    geofences
        .iter()
        .filter_map(|fence| {
            let distance_km =
                haversine_km(point.latitude, point.longitude, fence.latitude, fence.longitude);
            (distance_km > fence.radius_km).then(|| GeofenceViolation {
                device_id: identity.device_id,
                device_name: identity.device_name.clone(),
                geofence_name: fence.name.clone(),
                distance_km,
                evaluated_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fence(name: &str, latitude: f64, longitude: f64, radius_km: f64) -> Geofence {
        Geofence {
            id: 1,
            device_id: 7,
            name: name.to_string(),
            latitude,
            longitude,
            radius_km,
        }
    }

    fn identity() -> DeviceIdentity {
        DeviceIdentity {
            device_id: 7,
            device_name: "work-laptop".to_string(),
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(haversine_km(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
    }

    #[test]
    fn test_distance_one_km_due_north_of_new_york() {
        // One kilometer of latitude is 1/111.195 of a degree.
        let lat = 40.7128;
        let lon = -74.0060;
        let north = lat + 1.0 / (EARTH_RADIUS_KM * std::f64::consts::PI / 180.0);
        let d = haversine_km(lat, lon, north, lon);
        assert!((d - 1.0).abs() < 1e-3, "expected ~1 km, got {d}");
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let d = haversine_km(40.0, -75.0, 41.0, -75.0);
        assert!((d - 111.195).abs() < 0.1, "expected ~111.2 km, got {d}");
    }

    #[test]
    fn test_distance_symmetry() {
        let pairs = [
            ((40.7128, -74.0060), (51.5074, -0.1278)),
            ((-33.8688, 151.2093), (35.6762, 139.6503)),
            ((89.9, 0.0), (-89.9, 180.0)),
            ((0.0, 179.9), (0.0, -179.9)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let ba = haversine_km(lat2, lon2, lat1, lon1);
            assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
        }
    }

    #[test]
    fn test_distance_antipodal_no_nan() {
        // Half the Earth's circumference, and no domain error from the
        // clamp despite rounding at the antipode.
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert!((d - 20015.09).abs() < 1.0, "expected ~20015 km, got {d}");

        let d = haversine_km(45.0, 30.0, -45.0, -150.0);
        assert!(d.is_finite());
        assert!((d - 20015.09).abs() < 1.0);
    }

    #[test]
    fn test_evaluate_empty_set() {
        let violations = evaluate(
            SamplePoint {
                latitude: 10.0,
                longitude: 10.0,
            },
            &identity(),
            &[],
            Utc::now(),
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_evaluate_at_center_never_violates() {
        let fences = vec![
            fence("a", 10.0, 20.0, 0.001),
            fence("b", 10.0, 20.0, 5.0),
        ];
        let violations = evaluate(
            SamplePoint {
                latitude: 10.0,
                longitude: 20.0,
            },
            &identity(),
            &fences,
            Utc::now(),
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_evaluate_boundary_is_compliant() {
        // Radius set to the exact computed distance: on the boundary,
        // compliant; any smaller radius, violated.
        let exact = haversine_km(0.0, 0.0, 0.0, 1.0);
        let on_boundary = fence("boundary", 0.0, 0.0, exact);
        let just_inside = fence("inside", 0.0, 0.0, exact - 1e-9);
        let point = SamplePoint {
            latitude: 0.0,
            longitude: 1.0,
        };

        assert!(evaluate(point, &identity(), &[on_boundary], Utc::now()).is_empty());
        assert_eq!(
            evaluate(point, &identity(), &[just_inside], Utc::now()).len(),
            1
        );
    }

    #[test]
    fn test_evaluate_reports_each_breached_fence() {
        let now = Utc::now();
        let fences = vec![
            fence("near", 40.0, -75.0, 200.0),
            fence("tight", 40.0, -75.0, 0.5),
            fence("far", 0.0, 0.0, 100.0),
        ];
        let violations = evaluate(
            SamplePoint {
                latitude: 41.0,
                longitude: -75.0,
            },
            &identity(),
            &fences,
            now,
        );
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].geofence_name, "tight");
        assert!((violations[0].distance_km - 111.195).abs() < 0.1);
        assert_eq!(violations[1].geofence_name, "far");
        assert!(violations.iter().all(|v| v.evaluated_at == now));
        assert!(violations.iter().all(|v| v.device_name == "work-laptop"));
    }
}
