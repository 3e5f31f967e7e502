// src/services/nearby.rs

//! Landing view lists: a browse sample and jobs close to the caller.

use crate::models::{Coordinates, JobSlot, NearbyJobs, Ranking};
use crate::services::padding::pad_to;
use crate::services::ranking::select;
use crate::storage::JobStore;
use crate::utils::geo::within_radius;

/// Number of entries in the available jobs list.
pub const AVAILABLE_DISPLAY_SIZE: usize = 5;

/// Number of entries in the nearest jobs list.
pub const NEAREST_DISPLAY_SIZE: usize = 3;

/// Radius used for the nearest jobs list, in kilometers.
pub const NEARBY_RADIUS_KM: f64 = 5.0;

/// Build the available and nearest lists for `center`.
///
/// `available` is the first jobs met while scanning the store, with no
/// filtering. `nearest` holds jobs within [`NEARBY_RADIUS_KM`], selected
/// according to `ranking`. Both lists are padded to their display sizes.
pub fn load_nearby(store: &JobStore, center: Coordinates, ranking: Ranking) -> NearbyJobs {
    let mut available: Vec<JobSlot> = store
        .iter()
        .take(AVAILABLE_DISPLAY_SIZE)
        .cloned()
        .map(JobSlot::Found)
        .collect();

    let candidates = store.iter().filter_map(|job| {
        let distance = job.distance_from(center);
        within_radius(distance, NEARBY_RADIUS_KM).then_some((job, distance))
    });
    let mut nearest = select(candidates, NEAREST_DISPLAY_SIZE, ranking);

    log::debug!(
        "Nearby load found {} available and {} nearest job(s)",
        available.len(),
        nearest.len()
    );

    pad_to(&mut available, AVAILABLE_DISPLAY_SIZE);
    pad_to(&mut nearest, NEAREST_DISPLAY_SIZE);
    NearbyJobs { available, nearest }
}
