use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use crate::core::{LearnerId, LearnerRecord, LookupResult, Result, RouterError};
use crate::interface::{ArchiveLookup, LearnerStore};

/// In-memory learner store.
///
/// Serves both roles: live entries through `LearnerStore`, archived records
/// through `ArchiveLookup`. A missing id is `RouterError::NotFound` in both.
#[derive(Debug, Default)]
pub struct InMemoryLearnerStore {
    live: RwLock<HashMap<LearnerId, LookupResult>>,
    archived: RwLock<HashMap<LearnerId, LearnerRecord>>,
}

impl InMemoryLearnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a live entry, replacing any previous entry for the same id
    pub fn insert(&self, entry: LookupResult) -> Result<()> {
        self.live.write()?.insert(entry.record.id, entry);
        Ok(())
    }

    /// Store an archived record, replacing any previous record for the same id
    pub fn insert_archived(&self, record: LearnerRecord) -> Result<()> {
        self.archived.write()?.insert(record.id, record);
        Ok(())
    }

    pub fn live_count(&self) -> Result<usize> {
        Ok(self.live.read()?.len())
    }

    pub fn archived_count(&self) -> Result<usize> {
        Ok(self.archived.read()?.len())
    }
}

impl LearnerStore for InMemoryLearnerStore {
    fn load_learner(&self, id: LearnerId) -> Result<LookupResult> {
        self.live
            .read()?
            .get(&id)
            .cloned()
            .ok_or(RouterError::NotFound(id))
    }
}

impl ArchiveLookup for InMemoryLearnerStore {
    fn archived_learner(&self, id: LearnerId) -> Result<LearnerRecord> {
        self.archived
            .read()?
            .get(&id)
            .cloned()
            .ok_or(RouterError::NotFound(id))
    }
}

/// On-disk seed for the three stores
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnerDataFile {
    #[serde(default)]
    pub archive: Vec<LearnerRecord>,
    #[serde(default)]
    pub primary: Vec<LookupResult>,
    #[serde(default)]
    pub failover: Vec<LookupResult>,
}

/// The three stores built from a `LearnerDataFile`
#[derive(Debug, Default)]
pub struct LearnerStores {
    pub archive: InMemoryLearnerStore,
    pub primary: InMemoryLearnerStore,
    pub failover: InMemoryLearnerStore,
}

impl LearnerDataFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn into_stores(self) -> Result<LearnerStores> {
        let stores = LearnerStores::default();
        for record in self.archive {
            stores.archive.insert_archived(record)?;
        }
        for entry in self.primary {
            stores.primary.insert(entry)?;
        }
        for entry in self.failover {
            stores.failover.insert(entry)?;
        }
        Ok(stores)
    }
}
