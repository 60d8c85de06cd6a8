use chrono::{DateTime, Utc};

use crate::core::{FailureEvent, LearnerId, LearnerRecord, LookupResult, Result};

/// Source of recorded upstream failures.
///
/// Implementations own retention; callers always receive everything currently held.
/// Errors are propagated to the caller, never treated as "no failures".
pub trait FailureEventSource: Send + Sync {
    fn failure_events(&self) -> Result<Vec<FailureEvent>>;
}

/// Operator-controlled runtime settings.
///
/// `None` covers both a missing key and a value that is not a boolean.
pub trait ToggleSource: Send + Sync {
    fn bool_setting(&self, name: &str) -> Option<bool>;
}

/// Wall-clock indirection so time can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Long-term archive of learner records.
pub trait ArchiveLookup: Send + Sync {
    /// Fails with `RouterError::NotFound` when no archived record exists.
    fn archived_learner(&self, id: LearnerId) -> Result<LearnerRecord>;
}

/// A live learner store (primary or failover).
pub trait LearnerStore: Send + Sync {
    fn load_learner(&self, id: LearnerId) -> Result<LookupResult>;
}

/// Whether lookups should currently be served by the failover store.
pub trait FailoverSignal: Send + Sync {
    fn is_failover_mode_active(&self) -> Result<bool>;
}
