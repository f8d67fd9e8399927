// Service exports
pub mod profile_file;
pub mod results_file;

pub use profile_file::{parse_line, ProfileReader};
pub use results_file::{render, write_line, write_results};
