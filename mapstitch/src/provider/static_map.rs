//! Static-map tile provider.
//!
//! Resolves a tile center, zoom, pixel size, and an opaque style fragment
//! into a provider request URL and retrieves the raw image bytes through
//! an injected [`HttpClient`].
//!
//! # URL Layout
//!
//! `{base}?center={lat},{lon}&zoom={z}&size={w}x{h}&{style}&key={key}`
//!
//! The style fragment is spliced in verbatim, including when it is empty,
//! so an unstyled request carries an empty query segment between `size`
//! and `key`. The provider accepts it and keeping the layout fixed makes
//! request logs uniform.

use super::http::HttpClient;
use super::types::{ProviderError, TileSource};
use crate::geo::GeoPoint;
use tracing::debug;

/// Default endpoint for static map requests.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Default requested tile size in pixels.
pub const DEFAULT_TILE_SIZE: (u32, u32) = (640, 640);

/// Static-map imagery provider.
///
/// # Example
///
/// ```no_run
/// use mapstitch::geo::GeoPoint;
/// use mapstitch::provider::{ReqwestClient, StaticMapProvider, TileSource};
///
/// let client = ReqwestClient::new()?;
/// let provider = StaticMapProvider::new(client, "API_KEY".to_string(), 16);
/// let bytes = provider.fetch_tile(GeoPoint::new(50.0755, 14.4378))?;
/// # Ok::<(), mapstitch::provider::ProviderError>(())
/// ```
pub struct StaticMapProvider<C: HttpClient> {
    client: C,
    api_key: String,
    zoom: i32,
    size: (u32, u32),
    style: String,
}

impl<C: HttpClient> StaticMapProvider<C> {
    /// Create a provider with the default tile size and no style.
    pub fn new(client: C, api_key: String, zoom: i32) -> Self {
        Self {
            client,
            api_key,
            zoom,
            size: DEFAULT_TILE_SIZE,
            style: String::new(),
        }
    }

    /// Set the requested tile size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the pre-encoded style query fragment.
    pub fn with_style(mut self, style: String) -> Self {
        self.style = style;
        self
    }

    /// Build the request URL for the tile centered at `center`.
    pub fn tile_url(&self, center: GeoPoint) -> String {
        format!(
            "{}?center={}&zoom={}&size={}x{}&{}&key={}",
            DEFAULT_BASE_URL, center, self.zoom, self.size.0, self.size.1, self.style, self.api_key
        )
    }
}

impl<C: HttpClient> TileSource for StaticMapProvider<C> {
    fn fetch_tile(&self, center: GeoPoint) -> Result<Vec<u8>, ProviderError> {
        let url = self.tile_url(center);
        debug!(url = %url, "requesting tile");
        self.client.get(&url)
    }

    fn name(&self) -> &str {
        "static-map"
    }
}
