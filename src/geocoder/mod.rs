//! Address to coordinate resolution.

mod nominatim;

use std::future::Future;

use crate::error::Result;
use crate::models::Coordinate;

pub use nominatim::{NominatimGeocoder, SearchHit};

/// Resolves a free-text address to a coordinate.
///
/// Implementations report every failure to resolve, including an empty
/// result set, as [`Error::NotFound`](crate::Error::NotFound).
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &str) -> impl Future<Output = Result<Coordinate>> + Send;
}
