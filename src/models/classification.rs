//! Result of classifying a location against the zone set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinate, Zone};

/// Whether a location lies within its nearest zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    Inside,
    Outside,
}

impl ZoneStatus {
    /// Boundary is inclusive: a distance equal to the radius is inside.
    pub fn from_distance(distance_miles: f64, radius_miles: f64) -> Self {
        if distance_miles <= radius_miles {
            ZoneStatus::Inside
        } else {
            ZoneStatus::Outside
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, ZoneStatus::Inside)
    }
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneStatus::Inside => write!(f, "inside"),
            ZoneStatus::Outside => write!(f, "outside"),
        }
    }
}

/// Nearest zone for a location, with the great-circle distance to its center.
///
/// Transient: recomputed per query and never stored beyond the session
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub location: Coordinate,

    pub nearest_zone: Zone,

    /// Distance to `nearest_zone.center` in miles
    pub distance_miles: f64,

    pub status: ZoneStatus,

    pub computed_at: DateTime<Utc>,
}

impl ClassificationResult {
    pub fn is_inside(&self) -> bool {
        self.status.is_inside()
    }
}
