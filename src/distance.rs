//! Great-circle distance using the haversine formula.

use serde::Serialize;

use crate::models::Coordinate;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Every intermediate value of one haversine evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HaversineSteps {
    /// Latitude difference in radians
    pub d_lat: f64,
    /// Longitude difference in radians
    pub d_lon: f64,
    /// sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
    pub h: f64,
    /// Central angle, 2·atan2(√h, √(1−h))
    pub c: f64,
    pub distance_miles: f64,
}

/// Evaluate the haversine formula between `a` and `b`, keeping the intermediates.
pub fn haversine_steps(a: Coordinate, b: Coordinate) -> HaversineSteps {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    // Rounding can push h a hair past 1.0 near the antipode.
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    HaversineSteps {
        d_lat,
        d_lon,
        h,
        c,
        distance_miles: EARTH_RADIUS_MILES * c,
    }
}

/// Great-circle distance between two coordinates in miles
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    haversine_steps(a, b).distance_miles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    #[test]
    fn test_identical_points_are_zero() {
        for p in [
            point(0.0, 0.0),
            point(34.0722, -118.3760),
            point(-89.9, 179.9),
            point(90.0, -180.0),
        ] {
            assert_eq!(haversine_distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (point(34.0722, -118.3760), point(40.7681, -73.9819)),
            (point(-33.8688, 151.2093), point(51.5074, -0.1278)),
            (point(0.0, 179.5), point(0.0, -179.5)),
        ];
        for (a, b) in pairs {
            let ab = haversine_distance(a, b);
            let ba = haversine_distance(b, a);
            assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }
    }

    #[test]
    fn test_known_distances() {
        let la = point(34.0722, -118.3760);
        let sf = point(37.7840, -122.4075);
        let nyc = point(40.7681, -73.9819);

        let la_sf = haversine_distance(la, sf);
        assert!(la_sf > 330.0 && la_sf < 360.0, "LA-SF was {}", la_sf);

        let la_nyc = haversine_distance(la, nyc);
        assert!(la_nyc > 2400.0 && la_nyc < 2500.0, "LA-NYC was {}", la_nyc);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_distance(point(0.0, 0.0), point(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - PI * EARTH_RADIUS_MILES).abs() < 1e-6);
    }

    #[test]
    fn test_meridian_offset_matches_arc_length() {
        // Along a meridian the central angle equals the latitude difference.
        let a = point(10.0, 20.0);
        let b = point(11.0, 20.0);
        let expected = EARTH_RADIUS_MILES * 1f64.to_radians();
        assert!((haversine_distance(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_steps_agree_with_distance() {
        let a = point(34.0722, -118.3760);
        let b = point(37.7840, -122.4075);
        let steps = haversine_steps(a, b);

        assert!((steps.d_lat - (37.7840f64 - 34.0722).to_radians()).abs() < 1e-15);
        assert!((steps.d_lon - (-122.4075f64 + 118.3760).to_radians()).abs() < 1e-15);
        assert!(steps.h > 0.0 && steps.h < 1.0);
        assert_eq!(steps.distance_miles, EARTH_RADIUS_MILES * steps.c);
        assert_eq!(steps.distance_miles, haversine_distance(a, b));
    }
}
