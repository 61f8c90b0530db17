//! Geographic value types.

use std::fmt;

/// Valid latitude range in degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic point in decimal degrees.
///
/// Passed by value everywhere; there is no owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    /// Formats as `lat,lon`, the representation tile providers expect
    /// in their `center` query parameter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Signed degree deltas representing one grid-cell step in each axis.
///
/// The deltas are already adjusted for zoom ratio and local scale
/// distortion by the time a `GrowthStep` reaches the grid planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStep {
    /// Degrees of latitude per row step
    pub lat: f64,
    /// Degrees of longitude per column step
    pub lon: f64,
}

impl GrowthStep {
    /// Create a new step from per-axis degree deltas.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
