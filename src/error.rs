//! Error types shared by the library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The geocoder had no usable match for the address.
    #[error("location not found: {address}")]
    NotFound { address: String },

    /// The zone set is unusable (empty list, bad zone definition).
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

impl Error {
    pub fn not_found(address: &str) -> Self {
        Error::NotFound {
            address: address.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
