//! Spork - finds nearby, well-rated businesses
//!
//! This library reads business profiles from a text file, keeps the ones
//! within a distance of the user that meet a minimum rating, and writes them
//! out with the highest-tier sponsor listed first.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

use std::path::Path;

// Re-export commonly used types
pub use crate::core::{select_sponsor, Ranker};
pub use error::SporkError;
pub use models::{AdLevel, Location, Profile, RankedResults, SearchCriteria};
pub use services::{write_results, ProfileReader};

/// Run the whole pipeline from input file to results file
///
/// # Returns
/// Number of lines written to `output`
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    reader: &ProfileReader,
    input: P,
    output: Q,
    criteria: SearchCriteria,
) -> Result<usize, SporkError> {
    let profiles = reader.read_file(input)?;
    let results = Ranker::new(criteria).rank(profiles);
    write_results(&results, output)
}
