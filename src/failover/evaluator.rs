use std::sync::Arc;

use tracing::debug;

use super::FailoverPolicy;
use crate::core::Result;
use crate::interface::{Clock, FailoverSignal, FailureEventSource, ToggleSource};

/// Snapshot of one failover evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailoverStatus {
    /// Failures newer than `now - window`
    pub recent_failures: u64,
    /// Operator toggle, `false` when missing or malformed
    pub toggle_enabled: bool,
    /// `recent_failures > threshold && toggle_enabled`
    pub active: bool,
}

/// Decides whether failover mode is active.
///
/// Stateless: every call reads the failure source, the toggle and the clock afresh.
#[derive(Clone)]
pub struct FailoverModeEvaluator {
    failures: Arc<dyn FailureEventSource>,
    toggles: Arc<dyn ToggleSource>,
    clock: Arc<dyn Clock>,
    policy: FailoverPolicy,
}

impl FailoverModeEvaluator {
    pub fn new(
        failures: Arc<dyn FailureEventSource>,
        toggles: Arc<dyn ToggleSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_policy(failures, toggles, clock, FailoverPolicy::default())
    }

    pub fn with_policy(
        failures: Arc<dyn FailureEventSource>,
        toggles: Arc<dyn ToggleSource>,
        clock: Arc<dyn Clock>,
        policy: FailoverPolicy,
    ) -> Self {
        Self {
            failures,
            toggles,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> &FailoverPolicy {
        &self.policy
    }

    /// Run one evaluation and return the intermediate figures as well as the verdict.
    pub fn evaluate(&self) -> Result<FailoverStatus> {
        let events = self.failures.failure_events()?;

        let cutoff = self.clock.now() - self.policy.window;
        let recent_failures = events.iter().filter(|e| e.is_after(cutoff)).count() as u64;

        let toggle_enabled = self
            .toggles
            .bool_setting(&self.policy.toggle_key)
            .unwrap_or(false);

        let active = recent_failures > self.policy.threshold && toggle_enabled;

        debug!(
            recent_failures,
            threshold = self.policy.threshold,
            toggle_enabled,
            active,
            "failover mode evaluated"
        );

        Ok(FailoverStatus {
            recent_failures,
            toggle_enabled,
            active,
        })
    }
}

impl FailoverSignal for FailoverModeEvaluator {
    fn is_failover_mode_active(&self) -> Result<bool> {
        Ok(self.evaluate()?.active)
    }
}
