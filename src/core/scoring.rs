use crate::core::equivalence::tags_match;
use crate::models::{ScoringWeights, SponsorRecord, UserMatchProfile};

const MAX_SCORE: f64 = 100.0;

/// Score and contributing tags for one sponsor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMatch {
    pub score: u8,
    pub matched_tags: Vec<String>,
}

/// Calculate a match score (0-100) for a sponsor with the default weights
///
/// score = min(100, matched_tags * 15 + topic_bonus)
///
/// where `topic_bonus` is 20 when at least one matched tag is equivalent to
/// the newsletter topic.
pub fn calculate_match_score<S>(sponsor: &S, profile: Option<&UserMatchProfile>) -> u8
where
    S: SponsorRecord + ?Sized,
{
    calculate_match_score_with(sponsor, profile, &ScoringWeights::default())
}

pub fn calculate_match_score_with<S>(
    sponsor: &S,
    profile: Option<&UserMatchProfile>,
    weights: &ScoringWeights,
) -> u8
where
    S: SponsorRecord + ?Sized,
{
    score_sponsor(sponsor, profile, weights).score
}

/// Score a sponsor and collect the tags that earned the score in one pass
pub fn score_sponsor<S>(
    sponsor: &S,
    profile: Option<&UserMatchProfile>,
    weights: &ScoringWeights,
) -> TagMatch
where
    S: SponsorRecord + ?Sized,
{
    let tags = sponsor.tags();
    let profile = match profile {
        Some(profile) if !tags.is_empty() => profile,
        _ => return TagMatch::default(),
    };

    let criteria = profile.criteria();
    if criteria.is_empty() {
        return TagMatch::default();
    }

    let matched_tags = collect_matched_tags(tags, &criteria);
    if matched_tags.is_empty() {
        return TagMatch::default();
    }

    let topic_bonus = match profile.topic() {
        Some(topic) if matched_tags.iter().any(|tag| tags_match(tag, topic)) => weights.topic_bonus,
        _ => 0.0,
    };

    let total = matched_tags.len() as f64 * weights.per_tag + topic_bonus;

    TagMatch {
        score: clamp_score(total),
        matched_tags,
    }
}

/// Sponsor tags equivalent to at least one criterion, deduplicated, in the
/// sponsor's order
pub fn collect_matched_tags(tags: &[String], criteria: &[&str]) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();

    for tag in tags {
        if matched.contains(tag) {
            continue;
        }
        if criteria.iter().any(|criterion| tags_match(tag, criterion)) {
            matched.push(tag.clone());
        }
    }

    matched
}

#[inline]
fn clamp_score(total: f64) -> u8 {
    // NaN from misconfigured weights casts to 0
    total.min(MAX_SCORE).max(0.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sponsor;

    fn create_test_profile() -> UserMatchProfile {
        UserMatchProfile::new("Technology", ["AI"], Vec::<String>::new())
    }

    #[test]
    fn test_topic_and_interest_match() {
        let sponsor = Sponsor::new("s1", ["Technology", "AI/ML", "Business"]);
        let profile = create_test_profile();

        let result = score_sponsor(&sponsor, Some(&profile), &ScoringWeights::default());

        assert_eq!(result.matched_tags, vec!["Technology", "AI/ML"]);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_no_topic_bonus_from_interest_only() {
        let sponsor = Sponsor::new("s1", ["AI/ML"]);
        let profile = create_test_profile();

        assert_eq!(calculate_match_score(&sponsor, Some(&profile)), 15);
    }

    #[test]
    fn test_score_capped_at_100() {
        let sponsor = Sponsor::new(
            "s1",
            [
                "Tech",
                "Software",
                "SaaS",
                "Technology",
                "AI",
                "Artificial Intelligence",
                "Machine Learning",
            ],
        );
        let profile = UserMatchProfile::new("Technology", ["AI"], ["Software"]);

        assert_eq!(calculate_match_score(&sponsor, Some(&profile)), 100);
    }

    #[test]
    fn test_duplicate_sponsor_tags_count_once() {
        let sponsor = Sponsor::new("s1", ["Finance", "Finance"]);
        let profile = UserMatchProfile::new("Finance", Vec::<String>::new(), Vec::<String>::new());

        let result = score_sponsor(&sponsor, Some(&profile), &ScoringWeights::default());

        assert_eq!(result.matched_tags, vec!["Finance"]);
        assert_eq!(result.score, 35);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let profile = create_test_profile();
        let untagged = Sponsor::new("s1", Vec::<String>::new());
        assert_eq!(calculate_match_score(&untagged, Some(&profile)), 0);

        let tagged = Sponsor::new("s2", ["Health"]);
        assert_eq!(calculate_match_score(&tagged, None), 0);

        let empty = UserMatchProfile::default();
        assert_eq!(calculate_match_score(&tagged, Some(&empty)), 0);
    }

    #[test]
    fn test_custom_weights_rounded() {
        let sponsor = Sponsor::new("s1", ["Technology"]);
        let profile = create_test_profile();
        let weights = ScoringWeights {
            per_tag: 12.4,
            topic_bonus: 0.3,
        };

        assert_eq!(calculate_match_score_with(&sponsor, Some(&profile), &weights), 13);
    }
}
