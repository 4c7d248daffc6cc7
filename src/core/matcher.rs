use crate::core::scoring::{score_sponsor, TagMatch};
use crate::models::{MatchOptions, MatchedSponsor, ScoringWeights, SponsorRecord, UserMatchProfile};

const MATCH_SCORE_FIELD: &str = "matchScore";
const MATCHED_TAGS_FIELD: &str = "matchedTags";

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchReport {
    pub matches: Vec<MatchedSponsor>,
    pub total_candidates: usize,
}

/// Rank sponsors for a newsletter profile with the default weights
///
/// Returns an empty list when the profile is missing or has no topic, even
/// if its interests or ideal categories would match. Otherwise every sponsor
/// is scored, those below `options.min_score` are dropped, and the rest are
/// sorted by descending score (ties keep input order) and capped at
/// `options.limit`.
pub fn get_matched_sponsors<S>(
    sponsors: &[S],
    profile: Option<&UserMatchProfile>,
    options: MatchOptions,
) -> Vec<MatchedSponsor>
where
    S: SponsorRecord,
{
    rank_sponsors(sponsors, profile, options, &ScoringWeights::default())
}

fn rank_sponsors<S>(
    sponsors: &[S],
    profile: Option<&UserMatchProfile>,
    options: MatchOptions,
    weights: &ScoringWeights,
) -> Vec<MatchedSponsor>
where
    S: SponsorRecord,
{
    // Topic is a hard prerequisite here, unlike in the scorer
    let Some(profile) = profile.filter(|profile| profile.topic().is_some()) else {
        return Vec::new();
    };

    let mut matches: Vec<MatchedSponsor> = sponsors
        .iter()
        .filter_map(|sponsor| {
            let TagMatch {
                score,
                matched_tags,
            } = score_sponsor(sponsor, Some(profile), weights);

            (score >= options.min_score).then(|| {
                let mut sponsor = sponsor.to_sponsor();
                // Computed fields replace any stale copies carried in the record
                sponsor.extra.remove(MATCH_SCORE_FIELD);
                sponsor.extra.remove(MATCHED_TAGS_FIELD);

                MatchedSponsor {
                    sponsor,
                    match_score: score,
                    matched_tags,
                }
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep their input order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(options.limit);

    matches
}

/// Sponsor ranking orchestrator holding the configured weights and defaults
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    options: MatchOptions,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, options: MatchOptions) -> Self {
        Self { weights, options }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), MatchOptions::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Rank sponsors using this matcher's default options
    pub fn find_matches<S>(&self, profile: Option<&UserMatchProfile>, sponsors: &[S]) -> MatchReport
    where
        S: SponsorRecord,
    {
        self.find_matches_with(profile, sponsors, self.options)
    }

    pub fn find_matches_with<S>(
        &self,
        profile: Option<&UserMatchProfile>,
        sponsors: &[S],
        options: MatchOptions,
    ) -> MatchReport
    where
        S: SponsorRecord,
    {
        let total_candidates = sponsors.len();

        if profile.and_then(UserMatchProfile::topic).is_none() {
            tracing::debug!("Profile has no topic, skipping {} candidates", total_candidates);
        }

        let matches = rank_sponsors(sponsors, profile, options, &self.weights);

        tracing::debug!(
            "Ranked {} of {} candidates (limit: {}, min score: {})",
            matches.len(),
            total_candidates,
            options.limit,
            options.min_score
        );

        MatchReport {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
