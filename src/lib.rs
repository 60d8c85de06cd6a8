// ============================================================================
// Learner Router Library
// ============================================================================

pub mod core;
pub mod interface;
pub mod failover;
pub mod application;
pub mod infrastructure;
pub mod config;

// Re-export main types for convenience
pub use core::{FailureEvent, LearnerId, LearnerRecord, LookupResult, Result, RouterError};
pub use interface::{ArchiveLookup, Clock, FailoverSignal, FailureEventSource, LearnerStore, ToggleSource};
pub use failover::{FailoverModeEvaluator, FailoverPolicy, FailoverStatus};
pub use application::LearnerService;
pub use infrastructure::{
    EnvSettings, FixedClock, InMemoryFailureLog, InMemoryLearnerStore, LearnerDataFile,
    StaticSettings, SystemClock,
};

use std::sync::Arc;

/// Fully wired router over in-memory stores
///
/// # Examples
///
/// ```
/// use learner_router::{LearnerDataFile, LearnerRecord, LookupResult, StaticSettings, Router};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = LearnerDataFile {
///     primary: vec![LookupResult::live(LearnerRecord::new(1, "Ada"))],
///     ..Default::default()
/// };
///
/// let router = Router::from_data(data, Default::default(), StaticSettings::new())?;
/// assert_eq!(router.service().get_learner(1, false)?.name, "Ada");
/// # Ok(())
/// # }
/// ```
pub struct Router {
    service: LearnerService,
    evaluator: Arc<FailoverModeEvaluator>,
}

impl Router {
    /// Wire stores and a failure log using the wall clock
    pub fn from_data(
        data: LearnerDataFile,
        failures: InMemoryFailureLog,
        toggles: impl ToggleSource + 'static,
    ) -> Result<Self> {
        Self::from_parts(data, failures, toggles, SystemClock, FailoverPolicy::default())
    }

    pub fn from_parts(
        data: LearnerDataFile,
        failures: InMemoryFailureLog,
        toggles: impl ToggleSource + 'static,
        clock: impl Clock + 'static,
        policy: FailoverPolicy,
    ) -> Result<Self> {
        let stores = data.into_stores()?;
        let evaluator = Arc::new(FailoverModeEvaluator::with_policy(
            Arc::new(failures),
            Arc::new(toggles),
            Arc::new(clock),
            policy,
        ));
        let service = LearnerService::new(
            Arc::new(stores.archive),
            evaluator.clone(),
            Arc::new(stores.primary),
            Arc::new(stores.failover),
        );
        Ok(Self { service, evaluator })
    }

    pub fn service(&self) -> &LearnerService {
        &self.service
    }

    pub fn evaluator(&self) -> &FailoverModeEvaluator {
        &self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn data() -> LearnerDataFile {
        LearnerDataFile {
            archive: vec![LearnerRecord::new(2, "Archived Bo")],
            primary: vec![LookupResult::live(LearnerRecord::new(1, "Primary Ada"))],
            failover: vec![LookupResult::live(LearnerRecord::new(1, "Failover Ada"))],
        }
    }

    #[test]
    fn test_router_primary_path() {
        let router = Router::from_data(data(), InMemoryFailureLog::new(), StaticSettings::new()).unwrap();
        assert_eq!(router.service().get_learner(1, false).unwrap().name, "Primary Ada");
        assert_eq!(router.service().get_learner(2, true).unwrap().name, "Archived Bo");
    }

    #[test]
    fn test_router_switches_to_failover() {
        let now = Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap();
        let log = InMemoryFailureLog::new();
        for _ in 0..101 {
            log.record_failure(now - Duration::minutes(1)).unwrap();
        }

        let router = Router::from_parts(
            data(),
            log,
            StaticSettings::new().with("IsFailoverModeEnabled", "true"),
            FixedClock::new(now),
            FailoverPolicy::default(),
        )
        .unwrap();

        assert!(router.evaluator().evaluate().unwrap().active);
        assert_eq!(router.service().get_learner(1, false).unwrap().name, "Failover Ada");
    }
}
