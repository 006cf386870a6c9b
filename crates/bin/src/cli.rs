//! CLI argument definitions for the Paperboard binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Storage backend type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// SQLite database (default)
    #[default]
    Sqlite,
    /// In-memory with JSON persistence (for development and ephemeral deployments)
    Inmemory,
}

/// Paperboard: track papers and their reviews
#[derive(Parser, Debug)]
#[command(name = "paperboard")]
#[command(about = "Paperboard - track academic papers and the reviews written about them")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Paperboard web server
    Serve(ServeArgs),
    /// Check health of a running Paperboard server
    Health(HealthArgs),
    /// Show record counts of a data directory
    Info(InfoArgs),
    /// List the papers of a data directory
    Papers(PapersArgs),
}

/// Where records are stored. Shared by every command that opens storage.
#[derive(Args, Debug, Clone, Default)]
pub struct BackendConfig {
    /// Storage backend to use
    #[arg(short, long, value_enum, default_value_t, env = "PAPERBOARD_BACKEND")]
    pub backend: Backend,

    /// Data directory for storage files.
    /// For SQLite: stores paperboard.db
    /// For InMemory: stores paperboard.json
    #[arg(short = 'D', long, env = "PAPERBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl BackendConfig {
    /// The data directory, defaulting to the working directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Arguments for the serve command
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "PAPERBOARD_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "PAPERBOARD_HOST")]
    pub host: String,

    #[command(flatten)]
    pub backend_config: BackendConfig,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            backend_config: BackendConfig::default(),
        }
    }
}

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(short, long, default_value = "http://127.0.0.1:3000", env = "PAPERBOARD_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub backend_config: BackendConfig,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the papers command
#[derive(Args, Debug)]
pub struct PapersArgs {
    #[command(flatten)]
    pub backend_config: BackendConfig,

    /// Only list papers owned or co-authored by this user
    #[arg(long)]
    pub author: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
