//! Response bodies for the check endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use zonecheck::models::ClassificationResult;
use zonecheck::presentation::{map_view, steps_view, summary};

/// Optional extra view to attach to a check response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Map,
    Steps,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub summary: String,
    pub result: ClassificationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<String>,
}

impl CheckResponse {
    pub fn new(result: ClassificationResult, view: Option<View>) -> Self {
        let map = (view == Some(View::Map)).then(|| map_view(&result));
        let steps = (view == Some(View::Steps)).then(|| steps_view(&result));

        Self {
            summary: summary(&result),
            result,
            map,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonecheck::models::{sample_zones, Coordinate};

    fn la_result() -> ClassificationResult {
        zonecheck::classify(
            Coordinate {
                lat: 34.0722,
                lon: -118.3760,
            },
            &sample_zones(),
        )
        .unwrap()
    }

    #[test]
    fn test_plain_response_has_no_views() {
        let body = serde_json::to_value(CheckResponse::new(la_result(), None)).unwrap();

        assert_eq!(body["result"]["status"], "inside");
        assert!(body["summary"].as_str().unwrap().contains("0.00 miles inside"));
        assert!(body.get("map").is_none());
        assert!(body.get("steps").is_none());
    }

    #[test]
    fn test_map_view_attached() {
        let response = CheckResponse::new(la_result(), Some(View::Map));
        assert!(response.map.is_some());
        assert!(response.steps.is_none());
    }

    #[test]
    fn test_steps_view_attached() {
        let response = CheckResponse::new(la_result(), Some(View::Steps));
        assert!(response.steps.unwrap().starts_with("Step-by-Step"));
    }
}
