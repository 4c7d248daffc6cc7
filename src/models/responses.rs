use serde::{Deserialize, Serialize};
use crate::models::domain::MatchedSponsor;

/// Ranked sponsors for one newsletter profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchedSponsor>,
    pub total_candidates: usize,
    pub total_results: usize,
}
