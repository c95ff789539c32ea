//! Agromano: livestock farm management platform.
//!
//! Backend service for registering farm holdings (explotaciones), the
//! animals raised on them, and their feeding, medication, vaccination,
//! inspection, parcel, and movement records, plus JSON/PDF reporting per
//! titular. The REST API is consumed by a separate web frontend.

pub mod model;
pub mod server;
