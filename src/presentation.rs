//! Renderers for a [`ClassificationResult`].
//!
//! Everything here is a pure function of the result it is handed; callers
//! decide which view to show and when.

use serde_json::{json, Value};

use crate::distance::{haversine_steps, EARTH_RADIUS_MILES};
use crate::models::{ClassificationResult, Coordinate};

const OSM_VIEW_BASE: &str = "https://www.openstreetmap.org/";
const MAP_ZOOM: u8 = 10;

pub fn not_found_message() -> &'static str {
    "Location not found."
}

/// One-line verdict with distance, status and charges
pub fn summary(result: &ClassificationResult) -> String {
    let charges = if result.is_inside() {
        "No additional charges."
    } else {
        "Additional charges are applicable."
    };

    format!(
        "The location is {:.2} miles {} of {}. {}",
        result.distance_miles, result.status, result.nearest_zone.name, charges
    )
}

/// Link to an OpenStreetMap view with a marker at `point`
pub fn map_link(point: Coordinate) -> String {
    format!(
        "{}?mlat={lat:.5}&mlon={lon:.5}#map={}/{lat:.5}/{lon:.5}",
        OSM_VIEW_BASE,
        MAP_ZOOM,
        lat = point.lat,
        lon = point.lon
    )
}

/// GeoJSON FeatureCollection: delivery pin, zone pin and the line between them
pub fn map_view(result: &ClassificationResult) -> Value {
    let location = result.location.to_lon_lat();
    let zone_center = result.nearest_zone.center.to_lon_lat();

    json!({
        "type": "FeatureCollection",
        "view_url": map_link(result.location),
        "zone_url": map_link(result.nearest_zone.center),
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": location },
                "properties": { "name": "Delivery Location", "role": "location" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": zone_center },
                "properties": {
                    "name": &result.nearest_zone.name,
                    "role": "zone",
                    "radius_miles": result.nearest_zone.radius_miles
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [location, zone_center] },
                "properties": {
                    "role": "distance",
                    "distance_miles": result.distance_miles,
                    "status": result.status
                }
            }
        ]
    })
}

/// Walk through the haversine formula with the numbers behind `result`
pub fn steps_view(result: &ClassificationResult) -> String {
    let steps = haversine_steps(result.location, result.nearest_zone.center);

    let mut out = String::new();
    out.push_str("Step-by-Step Miles Calculation (Haversine Formula)\n");
    out.push_str(&format!(
        "  1. Convert latitude and longitude differences to radians: Δlat = {:.6}, Δlon = {:.6}\n",
        steps.d_lat, steps.d_lon
    ));
    out.push_str(&format!(
        "  2. Apply: a = sin²(Δlat/2) + cos(lat1) × cos(lat2) × sin²(Δlon/2) = {:.10}\n",
        steps.h
    ));
    out.push_str(&format!(
        "  3. Apply: c = 2 × atan2(√a, √(1−a)) = {:.10}\n",
        steps.c
    ));
    out.push_str(&format!(
        "  4. Distance = {} × c = {:.2} miles (Earth's radius in miles)\n",
        EARTH_RADIUS_MILES, steps.distance_miles
    ));
    out.push_str(&format!(
        "Result: {:.2} miles {} the {} zone.",
        result.distance_miles, result.status, result.nearest_zone.name
    ));
    out
}
