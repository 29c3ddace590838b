//! Repository implementations.

pub mod device;
pub mod geofence;
pub mod location;

pub use device::DeviceRepository;
pub use geofence::GeofenceRepository;
pub use location::{LocationHistoryQuery, LocationRepository};
