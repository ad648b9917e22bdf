//! Single-owner query session.
//!
//! A [`ZoneSession`] holds the zone set, the geocoder and the most recent
//! classification. Views read the stored result through the session instead
//! of a shared global; only a successful classification replaces it.

use serde_json::Value;
use tracing::{debug, info};

use crate::classifier::classify;
use crate::error::{Error, Result};
use crate::geocoder::Geocoder;
use crate::models::{ClassificationResult, Zone};
use crate::presentation;

/// Resolve `address` and classify it against `zones`.
///
/// Blank input is a no-op and yields `Ok(None)` without contacting the
/// geocoder. When the geocoder cannot resolve the address the classifier is
/// never run.
pub async fn check_address<G: Geocoder>(
    geocoder: &G,
    zones: &[Zone],
    address: &str,
) -> Result<Option<ClassificationResult>> {
    let address = address.trim();
    if address.is_empty() {
        debug!("Ignoring blank address");
        return Ok(None);
    }

    let location = geocoder.geocode(address).await?;
    let result = classify(location, zones)?;

    info!(
        "'{}' is {:.2} miles {} of {}",
        address, result.distance_miles, result.status, result.nearest_zone.name
    );

    Ok(Some(result))
}

pub struct ZoneSession<G> {
    zones: Vec<Zone>,
    geocoder: G,
    last: Option<ClassificationResult>,
}

impl<G: Geocoder> ZoneSession<G> {
    /// Create a session; fails if `zones` is empty
    pub fn new(zones: Vec<Zone>, geocoder: G) -> Result<Self> {
        if zones.is_empty() {
            return Err(Error::Configuration(
                "a session needs at least one zone".to_string(),
            ));
        }

        Ok(Self {
            zones,
            geocoder,
            last: None,
        })
    }

    /// Submit an address. Only a successful classification replaces the
    /// stored result; blank input and failed lookups leave it in place.
    pub async fn submit(&mut self, address: &str) -> Result<Option<&ClassificationResult>> {
        match check_address(&self.geocoder, &self.zones, address).await? {
            Some(result) => {
                self.last = Some(result);
                Ok(self.last.as_ref())
            }
            None => Ok(None),
        }
    }

    pub fn last(&self) -> Option<&ClassificationResult> {
        self.last.as_ref()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn map_view(&self) -> Option<Value> {
        self.last.as_ref().map(presentation::map_view)
    }

    pub fn steps_view(&self) -> Option<String> {
        self.last.as_ref().map(presentation::steps_view)
    }
}
