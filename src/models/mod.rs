// Model exports
pub mod domain;

pub use domain::{AdLevel, Location, Profile, RankedResults, SearchCriteria, MAX_NAME_LEN};
