use crate::models::Location;

/// Calculate the straight-line distance between two points in miles
///
/// # Arguments
/// * `from` - Usually the user's location
/// * `to` - The business location
///
/// # Returns
/// Euclidean distance, `sqrt(dx^2 + dy^2)`
#[inline]
pub fn euclidean_distance(from: Location, to: Location) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;

    (dx * dx + dy * dy).sqrt()
}

/// Check if a distance falls within a radius (boundary inclusive)
#[inline]
pub fn is_within_radius(distance: f64, max_distance: f64) -> bool {
    distance <= max_distance
}
