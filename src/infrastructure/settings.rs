use std::collections::HashMap;
use std::sync::RwLock;

use crate::interface::ToggleSource;

/// Lenient boolean parsing: `true`/`false` in any case, surrounding whitespace ignored.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Settings held in memory, adjustable at runtime
#[derive(Debug, Default)]
pub struct StaticSettings {
    values: RwLock<HashMap<String, String>>,
}

impl StaticSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(name);
    }
}

impl ToggleSource for StaticSettings {
    fn bool_setting(&self, name: &str) -> Option<bool> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(name).and_then(|raw| parse_bool(raw))
    }
}

/// Settings read from the process environment on every call
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    prefix: String,
}

impl EnvSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every setting name before the lookup
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl ToggleSource for EnvSettings {
    fn bool_setting(&self, name: &str) -> Option<bool> {
        let key = format!("{}{}", self.prefix, name);
        std::env::var(&key).ok().and_then(|raw| parse_bool(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("  TRUE "), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("1"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_static_settings() {
        let settings = StaticSettings::new().with("IsFailoverModeEnabled", "true");
        assert_eq!(settings.bool_setting("IsFailoverModeEnabled"), Some(true));
        assert_eq!(settings.bool_setting("Other"), None);

        settings.set("IsFailoverModeEnabled", "maybe");
        assert_eq!(settings.bool_setting("IsFailoverModeEnabled"), None);

        settings.remove("IsFailoverModeEnabled");
        assert_eq!(settings.bool_setting("IsFailoverModeEnabled"), None);
    }

    #[test]
    fn test_env_settings_missing_key() {
        let settings = EnvSettings::with_prefix("LEARNER_ROUTER_TEST_UNSET_");
        assert_eq!(settings.bool_setting("IsFailoverModeEnabled"), None);
    }
}
