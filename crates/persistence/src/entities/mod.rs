//! Entity definitions (database row mappings).

pub mod device;
pub mod geofence;
pub mod location;

pub use device::DeviceEntity;
pub use geofence::GeofenceEntity;
pub use location::LocationEntity;
