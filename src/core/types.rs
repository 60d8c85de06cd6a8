use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type LearnerId = i64;

/// A single failed upstream request, identified only by when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureEvent {
    pub at: DateTime<Utc>,
}

impl FailureEvent {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// True when the event happened strictly after `cutoff`.
    #[inline]
    pub fn is_after(&self, cutoff: DateTime<Utc>) -> bool {
        self.at > cutoff
    }
}

/// Learner record as returned by any of the stores.
///
/// Fields beyond `id` and `name` are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerRecord {
    pub id: LearnerId,
    pub name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LearnerRecord {
    pub fn new(id: LearnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an additional learner field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Result of a live-store read.
///
/// `archived` means the store believes the authoritative copy lives in the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub record: LearnerRecord,
    #[serde(default)]
    pub archived: bool,
}

impl LookupResult {
    pub fn live(record: LearnerRecord) -> Self {
        Self {
            record,
            archived: false,
        }
    }

    pub fn archived(record: LearnerRecord) -> Self {
        Self {
            record,
            archived: true,
        }
    }
}
