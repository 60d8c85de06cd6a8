use chrono::Duration;

/// Failed requests that must be exceeded (strictly) inside the window.
pub const DEFAULT_FAILED_REQUEST_THRESHOLD: u64 = 100;

/// Width of the sliding window, in minutes.
pub const DEFAULT_WINDOW_MINUTES: i64 = 10;

/// Setting name of the operator toggle.
pub const DEFAULT_TOGGLE_KEY: &str = "IsFailoverModeEnabled";

/// Failover activation policy
///
/// Defaults: more than 100 failures in the last 10 minutes, gated by the
/// `IsFailoverModeEnabled` toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverPolicy {
    /// Failure count that must be exceeded
    pub threshold: u64,

    /// Sliding window ending at "now"
    pub window: Duration,

    /// Name looked up in the toggle source
    pub toggle_key: String,
}

impl Default for FailoverPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FAILED_REQUEST_THRESHOLD,
            window: Duration::minutes(DEFAULT_WINDOW_MINUTES),
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
        }
    }
}

impl FailoverPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure threshold
    pub fn threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the window width
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Set the toggle setting name
    pub fn toggle_key(mut self, key: &str) -> Self {
        self.toggle_key = key.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = FailoverPolicy::default();
        assert_eq!(policy.threshold, 100);
        assert_eq!(policy.window, Duration::minutes(10));
        assert_eq!(policy.toggle_key, "IsFailoverModeEnabled");
    }

    #[test]
    fn test_builder() {
        let policy = FailoverPolicy::new()
            .threshold(5)
            .window(Duration::seconds(30))
            .toggle_key("FailoverOn");

        assert_eq!(policy.threshold, 5);
        assert_eq!(policy.window, Duration::seconds(30));
        assert_eq!(policy.toggle_key, "FailoverOn");
    }
}
