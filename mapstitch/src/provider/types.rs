//! Provider types and traits.

use crate::geo::GeoPoint;
use thiserror::Error;

/// Errors that can occur while fetching a tile from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport-level failure before a status line was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Provider answered with a non-success status.
    #[error("HTTP {code} from {url}")]
    Status { code: u16, url: String },
}

/// Source of tile images for the mosaic composer.
///
/// Implementors resolve a tile-center coordinate into raw image bytes.
/// The composer stays agnostic of URLs, credentials, and the provider's
/// query language behind this seam, and tests substitute an in-memory
/// source.
pub trait TileSource {
    /// Fetches the raw image bytes for the tile centered at `center`.
    ///
    /// Blocking call, one tile at a time, no retry.
    fn fetch_tile(&self, center: GeoPoint) -> Result<Vec<u8>, ProviderError>;

    /// Returns the source's name for logging and identification.
    fn name(&self) -> &str;
}
