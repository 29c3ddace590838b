//! HTTP route handlers.

pub mod devices;
pub mod geofences;
pub mod health;
pub mod locations;
