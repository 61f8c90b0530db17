//! Geographic math for growth-step derivation.
//!
//! A fixed "degrees per tile" step tuned for one latitude covers a different
//! ground distance at another latitude, because longitude degrees shrink
//! toward the poles. This module measures that shrinkage with a great-circle
//! distance on a spherical earth and exposes it as a dimensionless
//! correction ratio against a fixed reference location.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Distance: meters

mod types;

pub use types::{GeoPoint, GrowthStep, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Mean earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Reference location the default growth steps are tuned for.
pub const REFERENCE_POINT: GeoPoint = GeoPoint {
    lat: 50.0755,
    lon: 14.4378,
};

/// Default degrees-per-tile step at [`REFERENCE_POINT`] and zoom 16.
///
/// Covers one 640x614 usable-pixel tile at roughly 1.53 m/px.
pub const DEFAULT_STEP: GrowthStep = GrowthStep {
    lat: 0.0084,
    lon: 0.0137,
};

/// Longitude offset used when sampling the local degree length.
pub const DEFAULT_OFFSET_DEG: f64 = 0.01;

/// Great-circle distance between two points in meters.
///
/// Haversine formula on a spherical earth. Accurate to ~0.5% against the
/// WGS-84 ellipsoid, which is far below the tile-coverage tolerance this
/// crate needs, and never degenerates to a flat-earth approximation.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat * DEG_TO_RAD;
    let lat2 = b.lat * DEG_TO_RAD;
    let dlat = (b.lat - a.lat) * DEG_TO_RAD;
    let dlon = (b.lon - a.lon) * DEG_TO_RAD;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Ground distance covered by `offset_deg` of longitude at `point`.
///
/// # Arguments
///
/// * `point` - Location to sample
/// * `offset_deg` - Longitude offset to measure, typically
///   [`DEFAULT_OFFSET_DEG`]
pub fn lon_step_meters(point: GeoPoint, offset_deg: f64) -> f64 {
    let shifted = GeoPoint::new(point.lat, point.lon + offset_deg);
    haversine_distance_m(point, shifted)
}

/// Scale correction between a reference location and a target location.
///
/// Returns `lon_step_meters(reference) / lon_step_meters(target)`: the
/// factor by which a degree of longitude at `reference` is longer on the
/// ground than at `target`. Dividing a step constant tuned at `reference`
/// by this ratio keeps tile coverage visually consistent at `target`.
pub fn scale_ratio(reference: GeoPoint, target: GeoPoint) -> f64 {
    lon_step_meters(reference, DEFAULT_OFFSET_DEG) / lon_step_meters(target, DEFAULT_OFFSET_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meters per degree of longitude at the equator on the mean sphere.
    const METERS_PER_DEG_EQUATOR: f64 = 2.0 * PI * EARTH_RADIUS_M / 360.0;

    #[test]
    fn test_haversine_one_degree_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = haversine_distance_m(a, b);
        assert!(
            (d - METERS_PER_DEG_EQUATOR).abs() < 1.0,
            "expected ~{} m, got {} m",
            METERS_PER_DEG_EQUATOR,
            d
        );
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = GeoPoint::new(50.0755, 14.4378);
        let b = GeoPoint::new(40.7128, -74.006);
        let forward = haversine_distance_m(a, b);
        let backward = haversine_distance_m(b, a);
        assert!((forward - backward).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = GeoPoint::new(48.8566, 2.3522);
        assert_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[test]
    fn test_haversine_prague_to_london() {
        // Prague to London is roughly 1035 km great-circle
        let prague = GeoPoint::new(50.0755, 14.4378);
        let london = GeoPoint::new(51.5074, -0.1278);
        let d = haversine_distance_m(prague, london);
        assert!(
            (1_020_000.0..1_050_000.0).contains(&d),
            "unexpected distance {} m",
            d
        );
    }

    #[test]
    fn test_lon_step_shrinks_with_latitude() {
        let equator = lon_step_meters(GeoPoint::new(0.0, 0.0), DEFAULT_OFFSET_DEG);
        let mid = lon_step_meters(GeoPoint::new(50.0, 0.0), DEFAULT_OFFSET_DEG);
        let high = lon_step_meters(GeoPoint::new(70.0, 0.0), DEFAULT_OFFSET_DEG);
        assert!(equator > mid);
        assert!(mid > high);
    }

    #[test]
    fn test_lon_step_follows_cosine_of_latitude() {
        let lat = 50.0;
        let step = lon_step_meters(GeoPoint::new(lat, 14.0), DEFAULT_OFFSET_DEG);
        let expected = METERS_PER_DEG_EQUATOR * DEFAULT_OFFSET_DEG * (lat * DEG_TO_RAD).cos();
        // Haversine over 0.01 degrees tracks the cosine model very closely
        assert!(
            (step - expected).abs() < 0.5,
            "expected ~{} m, got {} m",
            expected,
            step
        );
    }

    #[test]
    fn test_scale_ratio_identity() {
        let p = GeoPoint::new(50.0755, 14.4378);
        assert!((scale_ratio(p, p) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_ratio_reciprocal() {
        let a = GeoPoint::new(50.0, 14.0);
        let b = GeoPoint::new(10.0, 100.0);
        let product = scale_ratio(a, b) * scale_ratio(b, a);
        assert!((product - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_ratio_reference_to_equator() {
        // Longitude degrees at the reference latitude (~50 N) are about
        // cos(50.0755 deg) of their equatorial length
        let ratio = scale_ratio(REFERENCE_POINT, GeoPoint::new(0.0, 0.0));
        let expected = (REFERENCE_POINT.lat * DEG_TO_RAD).cos();
        assert!(
            (ratio - expected).abs() < 1e-4,
            "expected ~{}, got {}",
            expected,
            ratio
        );
    }
}
