//! Great-circle distance and radius containment.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geospatial search circle: center in degrees, radius in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub lat: f64,
    pub lng: f64,
    pub radius_m: f64,
}

/// Haversine great-circle distance in meters between two points given in
/// degrees.
pub fn haversine_distance_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Clamp against rounding drift for antipodal points.
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}

/// Whether a point falls inside the circle, boundary inclusive.
///
/// A point missing either coordinate is never inside.
pub fn within_circle(lat: Option<f64>, lng: Option<f64>, circle: &Circle) -> bool {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            haversine_distance_m(lat, lng, circle.lat, circle.lng) <= circle.radius_m
        }
        _ => false,
    }
}
