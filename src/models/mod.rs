// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AudienceDemographics, ContactMethod, ContactType, MatchOptions, MatchedSponsor, ScoringWeights,
    Sponsor, SponsorDocument, SponsorMatchProfile, SponsorRecord, SponsorStatus, UserMatchProfile,
};
pub use requests::MatchRequest;
pub use responses::FindMatchesResponse;
