// src/utils/geo.rs

//! Great-circle distance helpers.

use std::f64::consts::PI;

/// Statute miles per nautical mile.
const MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

/// Kilometers per statute mile.
const KM_PER_MILE: f64 = 1.609344;

/// Distance in kilometers between two points given in degrees.
///
/// Uses the spherical law of cosines. The cosine term is clamped to 1.0 so
/// that rounding cannot push `acos` out of its domain. Identical points are
/// exactly zero apart; the formula alone leaves a residue of about 1e-4 km.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    if lat1 == lat2 && lng1 == lng2 {
        return 0.0;
    }

    let rad_lat1 = PI * lat1 / 180.0;
    let rad_lat2 = PI * lat2 / 180.0;
    let rad_theta = PI * (lng1 - lng2) / 180.0;

    let cosine = (rad_lat1.sin() * rad_lat2.sin()
        + rad_lat1.cos() * rad_lat2.cos() * rad_theta.cos())
    .min(1.0);

    let degrees = cosine.acos() * 180.0 / PI;
    degrees * 60.0 * MILES_PER_NAUTICAL_MILE * KM_PER_MILE
}

/// Whether `distance` lies inside `radius` (both in kilometers).
pub fn within_radius(distance: f64, radius: f64) -> bool {
    distance <= radius
}
