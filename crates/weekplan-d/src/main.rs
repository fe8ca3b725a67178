//! weekplan — the weekplan daemon.
//!
//! Single binary that assembles the weekplan subsystems:
//! - Project store (redb)
//! - Scheduler
//! - REST API
//!
//! # Usage
//!
//! ```text
//! weekplan serve --port 5000 --data-dir /var/lib/weekplan
//! weekplan plan --data-dir /var/lib/weekplan --commit
//! ```

mod plan;
mod seed;
mod serve;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use weekplan_core::DaemonConfig;

#[derive(Parser)]
#[command(name = "weekplan", about = "Weekly project planning daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the REST API.
    Serve {
        #[command(flatten)]
        storage: StorageArgs,

        /// Address to bind to.
        #[arg(long)]
        bind: Option<IpAddr>,

        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,

        /// Do not insert the sample pipeline into an empty store.
        #[arg(long)]
        no_seed: bool,
    },

    /// Compute this week's schedule from the stored pipeline and print it.
    Plan {
        #[command(flatten)]
        storage: StorageArgs,

        /// Commit the computed week to the store.
        #[arg(long)]
        commit: bool,

        /// Print the week as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct StorageArgs {
    /// Path to a weekplan.toml config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data directory for persistent state (overrides the config file).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl StorageArgs {
    fn load_config(&self) -> anyhow::Result<DaemonConfig> {
        let mut config = DaemonConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = dir.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,weekplan=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            storage,
            bind,
            port,
            no_seed,
        } => {
            let mut config = storage.load_config()?;
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if no_seed {
                config.seed.enabled = false;
            }
            serve::run_serve(config).await
        }
        Command::Plan {
            storage,
            commit,
            json,
        } => plan::run_plan(storage.load_config()?, commit, json).await,
    }
}
