use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::MatchOptions;

/// Request to rank sponsors for a newsletter
///
/// The upper bound on `limit` comes from `matching.max_limit` and is applied
/// by [`MatchRequest::options`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[validate(range(max = 100))]
    #[serde(default = "default_min_score", rename = "minScore")]
    pub min_score: u8,
}

fn default_limit() -> u16 {
    20
}

fn default_min_score() -> u8 {
    10
}

impl Default for MatchRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_score: default_min_score(),
        }
    }
}

impl MatchRequest {
    /// Ranking options for this request, with the limit capped at `max_limit`
    pub fn options(&self, max_limit: u16) -> MatchOptions {
        MatchOptions {
            limit: self.limit.min(max_limit) as usize,
            min_score: self.min_score,
        }
    }
}
