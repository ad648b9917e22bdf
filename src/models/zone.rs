//! Delivery zone definitions.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Circular delivery region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub center: Coordinate,
    pub radius_miles: f64,
}

impl Zone {
    pub fn new(name: &str, center: Coordinate, radius_miles: f64) -> Self {
        Self {
            name: name.to_string(),
            center,
            radius_miles,
        }
    }
}

/// The zones shipped with the service when no config file is given.
pub fn sample_zones() -> Vec<Zone> {
    vec![
        Zone::new(
            "Los Angeles (Beverly & La Cienega)",
            Coordinate {
                lat: 34.0722,
                lon: -118.3760,
            },
            30.0,
        ),
        Zone::new(
            "San Francisco (Powell & Market)",
            Coordinate {
                lat: 37.7840,
                lon: -122.4075,
            },
            30.0,
        ),
        Zone::new(
            "New York City (Columbus Circle)",
            Coordinate {
                lat: 40.7681,
                lon: -73.9819,
            },
            8.0,
        ),
    ]
}
