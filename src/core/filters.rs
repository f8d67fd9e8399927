use crate::core::distance::{euclidean_distance, is_within_radius};
use crate::models::{Location, Profile};

/// Mark every profile within `max_distance` miles of `origin` as nearby
///
/// Profiles outside the radius come back untouched, so a flag set by an
/// earlier pass is never cleared.
pub fn find_nearby(profiles: Vec<Profile>, origin: Location, max_distance: f64) -> Vec<Profile> {
    profiles
        .into_iter()
        .map(|profile| {
            let distance = euclidean_distance(origin, profile.location);
            if is_within_radius(distance, max_distance) {
                profile.mark_nearby(distance)
            } else {
                profile
            }
        })
        .collect()
}

/// Mark every profile rated at least `min_rating` as good
pub fn find_good(profiles: Vec<Profile>, min_rating: f64) -> Vec<Profile> {
    profiles
        .into_iter()
        .map(|profile| {
            if profile.rating >= min_rating {
                profile.mark_good()
            } else {
                profile
            }
        })
        .collect()
}
