use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Anything the ranking entry point can score and hand back as a [`Sponsor`].
///
/// Plain sponsor records and stored sponsor documents both implement this, so
/// callers can pass whichever shape their sponsor source produced.
pub trait SponsorRecord {
    fn tags(&self) -> &[String];

    /// Convert into the plain record carried by a match result
    fn to_sponsor(&self) -> Sponsor;
}

/// Plain sponsor record
///
/// Only `_id` and `tags` are interpreted; every other field is kept verbatim
/// in `extra` and serialized back out alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Sponsor {
    pub fn new<I, T>(id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }

    /// Attach a pass-through field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl SponsorRecord for Sponsor {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn to_sponsor(&self) -> Sponsor {
        self.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    NamedPerson,
    BusinessEmail,
    GenericEmail,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorStatus {
    #[default]
    Pending,
    Approved,
}

/// Sponsor as stored in the sponsor collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SponsorDocument {
    #[serde(rename = "_id", alias = "id", deserialize_with = "object_id")]
    pub id: String,
    #[validate(length(min = 2, max = 256))]
    pub sponsor_name: String,
    #[validate(length(max = 256))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_link: Option<String>,
    #[validate(length(max = 256))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_domain: Option<String>,
    #[validate(length(max = 10))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_email: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_contact: Option<String>,
    #[serde(default)]
    pub contact_method: ContactMethod,
    #[validate(length(max = 256))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    #[validate(length(max = 256))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub status: SponsorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    /// Stored fields the matcher doesn't interpret (`newslettersSponsored`,
    /// `viewedBy`, `__v`, ...), carried through to match results
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SponsorRecord for SponsorDocument {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn to_sponsor(&self) -> Sponsor {
        // Every field serializes to a JSON value, so this is always an object
        let mut extra = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        extra.remove("_id");
        extra.remove("tags");

        Sponsor {
            id: self.id.clone(),
            tags: self.tags.clone(),
            extra,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceDemographics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SponsorMatchProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ideal_sponsor_categories: Vec<String>,
}

/// The slice of a user's newsletter info that drives sponsor matching
///
/// Every part is optional; missing or `null` values read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMatchProfile {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub audience_demographics: AudienceDemographics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sponsor_match_profile: SponsorMatchProfile,
}

impl UserMatchProfile {
    pub fn new<I, C>(topic: impl Into<String>, interests: I, ideal_sponsor_categories: C) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            topic: Some(topic.into()),
            audience_demographics: AudienceDemographics {
                interests: interests.into_iter().map(Into::into).collect(),
            },
            sponsor_match_profile: SponsorMatchProfile {
                ideal_sponsor_categories: ideal_sponsor_categories
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            },
        }
    }

    /// The topic, if present and non-empty
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|topic| !topic.is_empty())
    }

    pub fn interests(&self) -> &[String] {
        &self.audience_demographics.interests
    }

    pub fn ideal_sponsor_categories(&self) -> &[String] {
        &self.sponsor_match_profile.ideal_sponsor_categories
    }

    /// Combined matching criteria: topic, then interests, then ideal
    /// categories, with empty entries dropped.
    pub fn criteria(&self) -> Vec<&str> {
        self.topic
            .as_deref()
            .into_iter()
            .chain(self.interests().iter().map(String::as_str))
            .chain(self.ideal_sponsor_categories().iter().map(String::as_str))
            .filter(|criterion| !criterion.is_empty())
            .collect()
    }
}

/// Ranked sponsor with its computed match data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSponsor {
    #[serde(flatten)]
    pub sponsor: Sponsor,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedTags")]
    pub matched_tags: Vec<String>,
}

/// Points awarded by the match scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Points per matched sponsor tag
    pub per_tag: f64,
    /// Bonus when a matched tag is equivalent to the newsletter topic
    pub topic_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            per_tag: 15.0,
            topic_bonus: 20.0,
        }
    }
}

/// Ranking options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub limit: usize,
    pub min_score: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            min_score: 10,
        }
    }
}

/// Mongo ids arrive either as plain strings or as extended JSON `{"$oid": "..."}`
#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectId {
    Plain(String),
    Extended {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

fn object_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ObjectId::deserialize(deserializer)? {
        ObjectId::Plain(id) => id,
        ObjectId::Extended { oid } => oid,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
