//! Nearest-zone classification.

use chrono::Utc;
use tracing::debug;

use crate::distance::haversine_distance;
use crate::error::{Error, Result};
use crate::models::{ClassificationResult, Coordinate, Zone, ZoneStatus};

/// Find the zone whose center is closest to `location` and decide inside/outside.
///
/// Zones are scanned in order with a strict `<`, so on equal distances the
/// earlier zone wins. A location far from every zone still classifies
/// against the nearest one, as `Outside`.
pub fn classify(location: Coordinate, zones: &[Zone]) -> Result<ClassificationResult> {
    let mut nearest: Option<(&Zone, f64)> = None;

    for zone in zones {
        let distance = haversine_distance(location, zone.center);
        let closer = match nearest {
            Some((_, best)) => distance < best,
            None => true,
        };
        if closer {
            nearest = Some((zone, distance));
        }
    }

    let (zone, distance_miles) =
        nearest.ok_or_else(|| Error::Configuration("zone list is empty".to_string()))?;

    let status = ZoneStatus::from_distance(distance_miles, zone.radius_miles);

    debug!(
        "Classified {} against '{}': {:.2} miles, {}",
        location, zone.name, distance_miles, status
    );

    Ok(ClassificationResult {
        location,
        nearest_zone: zone.clone(),
        distance_miles,
        status,
        computed_at: Utc::now(),
    })
}
