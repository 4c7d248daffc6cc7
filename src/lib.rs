//! SponsorDB Match - sponsor-to-newsletter matching for SponsorDB
//!
//! This library scores sponsor leads against a newsletter's topic, audience
//! interests and ideal sponsor categories, and ranks the best fits.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, get_matched_sponsors, normalize_tag, tags_match, Matcher};
pub use models::{
    FindMatchesResponse, MatchOptions, MatchRequest, MatchedSponsor, ScoringWeights, Sponsor,
    SponsorDocument, SponsorRecord, UserMatchProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let sponsor = Sponsor::new("1", ["SaaS"]);
        let profile = UserMatchProfile::new("Technology", Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(calculate_match_score(&sponsor, Some(&profile)), 35);
    }
}
