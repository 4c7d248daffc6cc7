use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

use crate::models::{SponsorDocument, UserMatchProfile};

/// Errors that can occur while loading sponsor data
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed sponsor source
///
/// Reads the sponsor collection as a JSON array of sponsor documents and the
/// newsletter profile as a single JSON object (or `null`).
#[derive(Debug, Clone)]
pub struct JsonStore {
    sponsors_path: PathBuf,
    profile_path: PathBuf,
}

impl JsonStore {
    pub fn new(sponsors_path: impl Into<PathBuf>, profile_path: impl Into<PathBuf>) -> Self {
        Self {
            sponsors_path: sponsors_path.into(),
            profile_path: profile_path.into(),
        }
    }

    /// Load sponsor documents, dropping any that fail to decode or fail
    /// schema validation
    ///
    /// Only a missing file or a file that is not a JSON array is an error; a
    /// malformed record is logged and skipped so it can't hide the rest.
    pub fn load_sponsors(&self) -> Result<Vec<SponsorDocument>, StoreError> {
        let records: Vec<Value> = read_json(&self.sponsors_path)?;
        let loaded = records.len();

        let valid: Vec<SponsorDocument> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| decode_sponsor(index, record))
            .collect();

        tracing::info!(
            "Loaded {} sponsors from {} ({} skipped)",
            valid.len(),
            self.sponsors_path.display(),
            loaded - valid.len()
        );

        Ok(valid)
    }

    /// Load the newsletter profile; a `null` document means no profile
    pub fn load_profile(&self) -> Result<Option<UserMatchProfile>, StoreError> {
        let profile: Option<UserMatchProfile> = read_json(&self.profile_path)?;

        match &profile {
            Some(p) => tracing::info!(
                "Loaded profile from {} (topic: {:?}, criteria: {})",
                self.profile_path.display(),
                p.topic(),
                p.criteria().len()
            ),
            None => tracing::info!("Profile at {} is empty", self.profile_path.display()),
        }

        Ok(profile)
    }
}

fn decode_sponsor(index: usize, record: Value) -> Option<SponsorDocument> {
    let label = record
        .get("_id")
        .map(Value::to_string)
        .unwrap_or_else(|| format!("#{}", index));

    let document: SponsorDocument = match serde_json::from_value(record) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Skipping malformed sponsor {}: {}", label, e);
            return None;
        }
    };

    match document.validate() {
        Ok(()) => Some(document),
        Err(errors) => {
            tracing::warn!("Skipping invalid sponsor {}: {}", label, errors);
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
