//! mapstitch - static-map tile grids stitched into one raster.
//!
//! This library turns a geographic bounding region into a grid of
//! static-map tile requests, fetches the tiles sequentially, and
//! composites them into a single seamless image.
//!
//! # High-Level Flow
//!
//! ```no_run
//! use mapstitch::geo::{GeoPoint, GrowthStep};
//! use mapstitch::grid::{self, GridRequest};
//! use mapstitch::mosaic::{self, ComposeOptions};
//! use mapstitch::provider::{ReqwestClient, StaticMapProvider};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = grid::plan(&GridRequest {
//!     origin: GeoPoint::new(50.08, 14.42),
//!     step: GrowthStep::new(0.0084, 0.0137),
//!     rows: Some(3),
//!     cols: Some(4),
//!     end: None,
//! })?;
//!
//! let provider = StaticMapProvider::new(ReqwestClient::new()?, "API_KEY".into(), 16);
//! let canvas = mosaic::compose(&provider, &spec, &ComposeOptions::default())?;
//! mosaic::save(&canvas, std::path::Path::new("prague.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod geo;
pub mod grid;
pub mod logging;
pub mod mosaic;
pub mod provider;
pub mod style;
pub mod zoom;

/// Version of the mapstitch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
