use geo::{HaversineDistance, Point};
use crate::models::Location;

/// Default radius beyond which distance stops contributing, in meters
pub const DEFAULT_MAX_DISTANCE_M: f64 = 50_000.0;

/// Great-circle distance between two locations in meters
///
/// Uses the haversine formula on a spherical earth of mean radius.
#[inline]
pub fn haversine_distance_m(from: &Location, to: &Location) -> f64 {
    let a = Point::new(from.lon, from.lat);
    let b = Point::new(to.lon, to.lat);

    a.haversine_distance(&b)
}

/// Distance between two optional locations, None if either is missing
#[inline]
pub fn distance_between(from: Option<&Location>, to: Option<&Location>) -> Option<f64> {
    Some(haversine_distance_m(from?, to?))
}

/// Calculate distance score (0-1)
///
/// Falls linearly from 1 at zero distance to 0 at `max_distance_m`.
/// A missing distance scores 0.
#[inline]
pub fn distance_score(distance_m: Option<f64>, max_distance_m: f64) -> f64 {
    match distance_m {
        Some(d) if d.is_finite() && max_distance_m > 0.0 => {
            ((max_distance_m - d) / max_distance_m).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}
