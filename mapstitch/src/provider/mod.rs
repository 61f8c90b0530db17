//! Tile provider abstraction.
//!
//! This module provides the seam between grid planning and image
//! composition: a [`TileSource`] resolves a tile-center coordinate into
//! raw image bytes, and the [`StaticMapProvider`] implementation does so
//! against a remote static-map HTTP endpoint through an injected
//! [`HttpClient`].

mod http;
mod static_map;
mod types;

pub use http::{HttpClient, ReqwestClient};
pub use static_map::{StaticMapProvider, DEFAULT_BASE_URL, DEFAULT_TILE_SIZE};
pub use types::{ProviderError, TileSource};

#[cfg(test)]
pub use http::tests::MockHttpClient;
