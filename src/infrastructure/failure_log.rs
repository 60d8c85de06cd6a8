use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use crate::core::{FailureEvent, Result};
use crate::interface::FailureEventSource;

/// Thread-safe in-memory record of failed upstream requests
#[derive(Debug, Default)]
pub struct InMemoryFailureLog {
    events: RwLock<Vec<FailureEvent>>,
}

impl InMemoryFailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<FailureEvent>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    /// Load a JSON array of RFC 3339 timestamps
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let events: Vec<FailureEvent> = serde_json::from_str(&raw)?;
        Ok(Self::from_events(events))
    }

    pub fn record_failure(&self, at: DateTime<Utc>) -> Result<()> {
        self.events.write()?.push(FailureEvent::new(at));
        Ok(())
    }

    pub fn record_failure_now(&self) -> Result<()> {
        self.record_failure(Utc::now())
    }

    /// Drop events at or before `cutoff`; returns how many were removed
    pub fn prune_before(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut events = self.events.write()?;
        let before = events.len();
        events.retain(|e| e.is_after(cutoff));
        Ok(before - events.len())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.events.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl FailureEventSource for InMemoryFailureLog {
    fn failure_events(&self) -> Result<Vec<FailureEvent>> {
        Ok(self.events.read()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_record_and_prune() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let log = InMemoryFailureLog::new();
        assert!(log.is_empty().unwrap());

        log.record_failure(now - Duration::minutes(20)).unwrap();
        log.record_failure(now - Duration::minutes(10)).unwrap();
        log.record_failure(now - Duration::minutes(1)).unwrap();
        assert_eq!(log.len().unwrap(), 3);

        let removed = log.prune_before(now - Duration::minutes(10)).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(log.failure_events().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_timestamps_kept() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let log = InMemoryFailureLog::new();
        log.record_failure(at).unwrap();
        log.record_failure(at).unwrap();
        assert_eq!(log.len().unwrap(), 2);
    }
}
