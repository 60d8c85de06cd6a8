use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DATA_ENV: &str = "LEARNER_ROUTER_DATA";
pub const FAILURES_ENV: &str = "LEARNER_ROUTER_FAILURES";

/// Runtime configuration of the `learner-router` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file seeding the archive, primary and failover stores
    pub data_path: PathBuf,

    /// JSON array of failure timestamps; empty log when unset
    pub failures_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let data_path = std::env::var(DATA_ENV)
            .map(PathBuf::from)
            .with_context(|| format!("{DATA_ENV} must point to a learner data file"))?;

        Ok(Self {
            data_path,
            failures_path: std::env::var(FAILURES_ENV).ok().map(PathBuf::from),
        })
    }

    /// Command-line values win over the environment
    pub fn resolve(data: Option<PathBuf>, failures: Option<PathBuf>) -> Result<Self> {
        match data {
            Some(data_path) => Ok(Self {
                data_path,
                failures_path: failures.or_else(|| std::env::var(FAILURES_ENV).ok().map(PathBuf::from)),
            }),
            None => {
                let mut config = Self::from_env()?;
                if failures.is_some() {
                    config.failures_path = failures;
                }
                Ok(config)
            }
        }
    }
}
