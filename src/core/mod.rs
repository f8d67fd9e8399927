// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod ranker;
pub mod sponsor;

pub use distance::{euclidean_distance, is_within_radius};
pub use filters::{find_good, find_nearby};
pub use ranker::Ranker;
pub use sponsor::select_sponsor;
