use tracing::debug;

use crate::core::{
    filters::{find_good, find_nearby},
    sponsor::select_sponsor,
};
use crate::models::{Profile, RankedResults, SearchCriteria};

/// Runs the filter pipeline over a parsed profile list
///
/// # Pipeline Stages
/// 1. Proximity filter
/// 2. Rating filter
/// 3. Sponsor selection
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    criteria: SearchCriteria,
}

impl Ranker {
    pub fn new(criteria: SearchCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Flag nearby and good profiles and choose the sponsor
    ///
    /// Input order is preserved; nothing is dropped, so sponsor indices
    /// refer to the same positions the parser produced.
    pub fn rank(&self, profiles: Vec<Profile>) -> RankedResults {
        let total = profiles.len();

        let profiles = find_nearby(profiles, self.criteria.origin, self.criteria.max_distance);
        debug!(
            nearby = profiles.iter().filter(|p| p.is_nearby).count(),
            total, "proximity filter applied"
        );

        let profiles = find_good(profiles, self.criteria.min_rating);
        debug!(
            good = profiles.iter().filter(|p| p.is_good).count(),
            total, "rating filter applied"
        );

        let sponsor = select_sponsor(&profiles);
        debug!(?sponsor, "sponsor selected");

        RankedResults { profiles, sponsor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdLevel, Location};

    fn create_profile(name: &str, x: f64, y: f64, rating: f64, ad_level: AdLevel) -> Profile {
        Profile::new(name, Location::new(x, y), rating, ad_level)
    }

    fn create_criteria() -> SearchCriteria {
        SearchCriteria {
            origin: Location::new(0.0, 0.0),
            max_distance: 5.0,
            min_rating: 4.0,
        }
    }

    #[test]
    fn test_rank_basic() {
        let ranker = Ranker::new(create_criteria());
        let profiles = vec![
            create_profile("Near", 1.0, 1.0, 4.5, AdLevel::None),
            create_profile("Far", 10.0, 10.0, 5.0, AdLevel::Premium),
            create_profile("Poor", 1.0, 0.0, 2.0, AdLevel::Premium),
            create_profile("Sponsor", 0.0, 3.0, 4.0, AdLevel::Standard),
        ];

        let results = ranker.rank(profiles);

        assert_eq!(results.profiles.len(), 4);
        assert_eq!(results.sponsor, Some(3));
        let names: Vec<_> = results.ordered().map(|p| p.name_lossy()).collect();
        assert_eq!(names, vec!["Sponsor", "Near"]);
    }

    #[test]
    fn test_rank_nothing_qualifies() {
        let ranker = Ranker::new(create_criteria());
        let results = ranker.rank(vec![create_profile("Far", 50.0, 0.0, 5.0, AdLevel::Premium)]);

        assert_eq!(results.sponsor, None);
        assert_eq!(results.qualifying_count(), 0);
    }

    #[test]
    fn test_rank_empty_input() {
        let results = Ranker::new(create_criteria()).rank(Vec::new());

        assert!(results.profiles.is_empty());
        assert_eq!(results.sponsor, None);
    }
}
