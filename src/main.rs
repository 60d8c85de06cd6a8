use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use learner_router::{
    EnvSettings, InMemoryFailureLog, LearnerDataFile, Router, config::AppConfig,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "learner-router", version, about = "Route learner lookups across archive, primary and failover stores")]
struct Cli {
    /// Learner data file (overrides LEARNER_ROUTER_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Failure log file (overrides LEARNER_ROUTER_FAILURES)
    #[arg(long, global = true)]
    failures: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one learner and print it as JSON
    Lookup {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        /// Caller already knows the learner is archived
        #[arg(long)]
        archived: bool,
    },
    /// Show whether failover mode is currently active
    Status,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data, cli.failures).context("failed to load configuration")?;

    let data = LearnerDataFile::load(&config.data_path)
        .with_context(|| format!("failed to read {}", config.data_path.display()))?;
    let failures = match &config.failures_path {
        Some(path) => InMemoryFailureLog::load(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => InMemoryFailureLog::new(),
    };

    let router = Router::from_data(data, failures, EnvSettings::new())
        .context("failed to initialize stores")?;

    match cli.command {
        Command::Lookup { id, archived } => {
            let record = router.service().get_learner(id, archived)?;
            info!(learner_id = id, "lookup complete");
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Status => {
            let status = router.evaluator().evaluate()?;
            println!(
                "failover active: {} (failures in window: {}, threshold: {}, toggle: {})",
                status.active,
                status.recent_failures,
                router.evaluator().policy().threshold,
                status.toggle_enabled
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("learner_router=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
