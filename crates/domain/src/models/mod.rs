//! Domain models for the Device Tracker.

pub mod device;
pub mod geofence;
pub mod location;
pub mod violation;

pub use device::{Device, NewDevice};
pub use geofence::{Geofence, NewGeofence};
pub use location::{LocationSample, NewLocationSample, SampleMetadata};
pub use violation::GeofenceViolation;
