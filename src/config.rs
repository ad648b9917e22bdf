//! Zone and geocoder configuration loaded from TOML.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Error;
use crate::models::{sample_zones, Coordinate, Zone};

pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "zonecheck/0.1 (delivery zone lookup)";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    /// Built-in sample zones when the file has no `[[zones]]` entries
    #[serde(default = "default_zones")]
    pub zones: Vec<ZoneConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEOCODER_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

/// One `[[zones]]` entry, in the flat form operators write by hand
#[derive(Debug, Deserialize, Clone)]
pub struct ZoneConfig {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Radius in miles
    pub radius: f64,
}

impl ZoneConfig {
    fn to_zone(&self) -> crate::Result<Zone> {
        let center = Coordinate::new(self.lat, self.lon).map_err(|_| {
            Error::Configuration(format!(
                "zone '{}' has an invalid center ({}, {})",
                self.name, self.lat, self.lon
            ))
        })?;

        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::Configuration(format!(
                "zone '{}' has an invalid radius {}",
                self.name, self.radius
            )));
        }

        Ok(Zone::new(&self.name, center, self.radius))
    }
}

fn default_zones() -> Vec<ZoneConfig> {
    sample_zones()
        .into_iter()
        .map(|z| ZoneConfig {
            name: z.name,
            lat: z.center.lat,
            lon: z.center.lon,
            radius: z.radius_miles,
        })
        .collect()
}

impl Default for Config {
    /// Default geocoder settings and the built-in sample zones
    fn default() -> Self {
        Self {
            geocoder: GeocoderConfig::default(),
            zones: default_zones(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                info!("No config file given, using built-in zones");
                Ok(Self::default())
            }
        }
    }

    /// Validate and convert the zone entries. The list must not be empty.
    pub fn zones(&self) -> crate::Result<Vec<Zone>> {
        if self.zones.is_empty() {
            return Err(Error::Configuration("no zones configured".to_string()));
        }
        self.zones.iter().map(ZoneConfig::to_zone).collect()
    }
}
