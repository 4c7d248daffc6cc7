// Core algorithm exports
pub mod equivalence;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use equivalence::{tags_match, SYNONYMS};
pub use matcher::{get_matched_sponsors, MatchReport, Matcher};
pub use normalize::normalize_tag;
pub use scoring::{calculate_match_score, calculate_match_score_with, collect_matched_tags, score_sponsor, TagMatch};
