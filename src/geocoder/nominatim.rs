//! Nominatim search API client.

use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::Geocoder;
use crate::config::GeocoderConfig;
use crate::error::{Error, Result};
use crate::models::Coordinate;

/// One element of the search response array. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchHit {
    fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lon = self.lon.trim().parse::<f64>().ok()?;
        Coordinate::new(lat, lon).ok()
    }
}

/// Coordinate of the first hit, if it has a usable one
pub fn first_coordinate(hits: &[SearchHit]) -> Option<Coordinate> {
    hits.first().and_then(SearchHit::coordinate)
}

/// Geocoder backed by a Nominatim-compatible `/search` endpoint
pub struct NominatimGeocoder {
    client: Client,
    endpoint: Url,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid geocoder endpoint '{}'", config.endpoint))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Search URL for `address`, with the query string encoded
    pub fn search_url(&self, address: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("q", address);
        url
    }

    async fn search(&self, address: &str) -> anyhow::Result<Vec<SearchHit>> {
        let response = self.client.get(self.search_url(address)).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("geocoder returned status {}", response.status());
        }

        let hits = response.json::<Vec<SearchHit>>().await?;
        Ok(hits)
    }
}

impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinate> {
        let hits = match self.search(address).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Geocoding '{}' failed: {}", address, e);
                return Err(Error::not_found(address));
            }
        };

        debug!("Geocoder returned {} hits for '{}'", hits.len(), address);

        match first_coordinate(&hits) {
            Some(coordinate) => {
                let label = hits[0].display_name.as_deref().unwrap_or("unnamed");
                debug!("Resolved '{}' to {} ({})", address, coordinate, label);
                Ok(coordinate)
            }
            None => {
                if let Some(hit) = hits.first() {
                    warn!(
                        "Discarding unusable geocoder hit for '{}': lat={:?} lon={:?}",
                        address, hit.lat, hit.lon
                    );
                }
                Err(Error::not_found(address))
            }
        }
    }
}
