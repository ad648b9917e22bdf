//! Core data models for zone classification.

pub mod classification;
pub mod coordinate;
pub mod zone;

pub use classification::{ClassificationResult, ZoneStatus};
pub use coordinate::Coordinate;
pub use zone::{sample_zones, Zone};
