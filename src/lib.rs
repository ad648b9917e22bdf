//! zonecheck - delivery zone lookup by great-circle distance
//!
//! This library provides the distance engine, nearest-zone classifier,
//! geocoder client and result renderers shared by the `check` and `serve`
//! binaries.

pub mod classifier;
pub mod config;
pub mod distance;
pub mod error;
pub mod geocoder;
pub mod models;
pub mod presentation;
pub mod session;

pub use classifier::classify;
pub use distance::haversine_distance;
pub use error::{Error, Result};
pub use models::{ClassificationResult, Coordinate, Zone, ZoneStatus};
pub use session::{check_address, ZoneSession};
