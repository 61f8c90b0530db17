//! Tile-grid planning.
//!
//! Translates a start coordinate, a per-cell growth step, and either an end
//! coordinate or explicit cell counts into a [`GridSpec`]: the matrix
//! dimensions plus an ordered enumeration of tile-center coordinates.
//!
//! Enumeration order is row-major, scanning north to south and west to
//! east. The mosaic composer consumes tiles in exactly this order, so the
//! two must never diverge.

use crate::geo::{GeoPoint, GrowthStep};
use thiserror::Error;

/// Correction for the non-square aspect between the 640 px tile width and
/// the usable tile height, applied when deriving row counts from a span.
pub const ROW_ASPECT_CORRECTION: f64 = 640.0 / 616.0;

/// Errors raised while planning a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Both explicit cell counts and an end coordinate were supplied.
    #[error("supply either explicit width/height or an end coordinate, not both")]
    AmbiguousDimensions,

    /// Neither explicit cell counts nor an end coordinate were supplied.
    #[error("supply either explicit width/height or an end coordinate")]
    MissingDimensions,
}

/// Input to [`plan`]: an origin, a step, and one way of sizing the grid.
#[derive(Debug, Clone, Copy)]
pub struct GridRequest {
    /// Center of the top-left (northwest) tile
    pub origin: GeoPoint,
    /// Signed degree deltas per grid cell
    pub step: GrowthStep,
    /// Explicit row count
    pub rows: Option<u32>,
    /// Explicit column count
    pub cols: Option<u32>,
    /// Center of the bottom-right (southeast) tile, for derived sizing
    pub end: Option<GeoPoint>,
}

/// A planned grid of tile centers.
///
/// Invariant: `rows >= 1` and `cols >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub origin: GeoPoint,
    pub step: GrowthStep,
    pub rows: u32,
    pub cols: u32,
}

impl GridSpec {
    /// Total number of tiles in the grid.
    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// True only for a degenerate spec, which [`plan`] never produces.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Center coordinate of the cell at `row`, `col`.
    ///
    /// Row 0 holds the origin's latitude band; latitude decreases by one
    /// `step.lat` per row, longitude grows by one `step.lon` per column.
    pub fn center(&self, row: u32, col: u32) -> GeoPoint {
        GeoPoint::new(
            self.origin.lat - row as f64 * self.step.lat,
            self.origin.lon + col as f64 * self.step.lon,
        )
    }

    /// Iterator over all tile centers in row-major order.
    pub fn tile_centers(&self) -> TileCenters<'_> {
        TileCenters {
            spec: self,
            index: 0,
        }
    }
}

/// Row-major iterator over the tile centers of a [`GridSpec`].
pub struct TileCenters<'a> {
    spec: &'a GridSpec,
    index: usize,
}

impl Iterator for TileCenters<'_> {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<GeoPoint> {
        if self.index >= self.spec.len() {
            return None;
        }
        let row = (self.index / self.spec.cols as usize) as u32;
        let col = (self.index % self.spec.cols as usize) as u32;
        self.index += 1;
        Some(self.spec.center(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.spec.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileCenters<'_> {}

/// Plan a grid from a request.
///
/// Explicit `rows`/`cols` are used as given (floored at 1). With an `end`
/// coordinate instead, dimensions are derived from the coordinate span:
/// `rows = ceil(|lat span| / |lat step| * 640/616)` and
/// `cols = ceil(|lon span| / |lon step|)`, each floored at 1.
///
/// # Errors
///
/// [`GridError::AmbiguousDimensions`] when an end coordinate is combined
/// with any explicit count, [`GridError::MissingDimensions`] when neither
/// sizing is complete.
pub fn plan(request: &GridRequest) -> Result<GridSpec, GridError> {
    if request.end.is_some() && (request.rows.is_some() || request.cols.is_some()) {
        return Err(GridError::AmbiguousDimensions);
    }

    let (rows, cols) = match (request.rows, request.cols, request.end) {
        (Some(rows), Some(cols), None) => (rows.max(1), cols.max(1)),
        (None, None, Some(end)) => {
            let lat_span = (request.origin.lat - end.lat).abs();
            let lon_span = (request.origin.lon - end.lon).abs();
            let rows = (lat_span / request.step.lat.abs() * ROW_ASPECT_CORRECTION).ceil() as u32;
            let cols = (lon_span / request.step.lon.abs()).ceil() as u32;
            (rows.max(1), cols.max(1))
        }
        _ => return Err(GridError::MissingDimensions),
    };

    Ok(GridSpec {
        origin: request.origin,
        step: request.step,
        rows,
        cols,
    })
}
