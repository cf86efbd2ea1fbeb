pub mod output;
pub mod summary;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "crease")]
#[command(version)]
#[command(
    about = "Cricket match statistics API for the team analytics dashboard",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding default.toml and environment overrides
    #[arg(short, long, default_value = "config", env = "CREASE_CONFIG_DIR", global = true)]
    pub config_dir: PathBuf,

    /// Per-match metadata CSV (overrides config)
    #[arg(long, global = true)]
    pub match_info: Option<PathBuf>,

    /// Ball-by-ball CSV (overrides config)
    #[arg(long, global = true)]
    pub match_data: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the HTTP API (default)
    Serve {
        /// Listen port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
    /// Print a team's analytics and leaderboards
    Summary {
        /// Team name; all teams when omitted
        #[arg(short, long)]
        team: Option<String>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(path) = &self.match_info {
            config.data.match_info_path = path.clone();
        }
        if let Some(path) = &self.match_data {
            config.data.match_data_path = path.clone();
        }
        if let Some(Commands::Serve { port, host }) = &self.command {
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(host) = host {
                config.server.host = host.clone();
            }
        }
    }
}
