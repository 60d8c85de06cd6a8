use std::sync::Arc;

use tracing::debug;

use crate::core::{LearnerId, LearnerRecord, Result, RouterError};
use crate::interface::{ArchiveLookup, FailoverSignal, LearnerStore};

/// Which live store served a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveRoute {
    Primary,
    Failover,
}

/// Routes learner lookups to the archive, primary or failover store.
///
/// Every request touches at most two stores: one live store, plus the archive
/// when that store reports the record as archived.
#[derive(Clone)]
pub struct LearnerService {
    archive: Arc<dyn ArchiveLookup>,
    failover_signal: Arc<dyn FailoverSignal>,
    primary: Arc<dyn LearnerStore>,
    failover: Arc<dyn LearnerStore>,
}

impl LearnerService {
    pub fn new(
        archive: Arc<dyn ArchiveLookup>,
        failover_signal: Arc<dyn FailoverSignal>,
        primary: Arc<dyn LearnerStore>,
        failover: Arc<dyn LearnerStore>,
    ) -> Self {
        Self {
            archive,
            failover_signal,
            primary,
            failover,
        }
    }

    /// Fetch a learner.
    ///
    /// With `archived_hint` set the archive is queried directly. Otherwise the
    /// failover signal picks the live store, and a result flagged as archived is
    /// replaced by the archive's copy.
    ///
    /// # Errors
    ///
    /// `RouterError::InvalidIdentifier` for ids `<= 0`, before any store is
    /// touched. Store errors are returned unchanged.
    pub fn get_learner(&self, learner_id: LearnerId, archived_hint: bool) -> Result<LearnerRecord> {
        if learner_id <= 0 {
            return Err(RouterError::InvalidIdentifier(learner_id));
        }

        if archived_hint {
            debug!(learner_id, "archived hint set, reading archive");
            return self.archive.archived_learner(learner_id);
        }

        let route = if self.failover_signal.is_failover_mode_active()? {
            LiveRoute::Failover
        } else {
            LiveRoute::Primary
        };

        let response = match route {
            LiveRoute::Primary => self.primary.load_learner(learner_id)?,
            LiveRoute::Failover => self.failover.load_learner(learner_id)?,
        };

        if response.archived {
            debug!(learner_id, ?route, "live store reports record archived, reading archive");
            return self.archive.archived_learner(learner_id);
        }

        debug!(learner_id, ?route, "learner served from live store");
        Ok(response.record)
    }
}
