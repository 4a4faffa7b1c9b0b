//! CLI command definitions and dispatch.

pub mod file;
pub mod folder;
pub mod passwords;

use clap::{Parser, Subcommand};

use docex_client::RestClient;
use docex_core::config::AppConfig;
use docex_core::error::AppError;

use crate::output::OutputFormat;

/// HMFM Document Explorer — scripting CLI
#[derive(Debug, Parser)]
#[command(name = "docex-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects the config/{env}.toml overlay)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// File management
    File(file::FileArgs),
    /// Folder PIN reference table
    Passwords(passwords::PasswordArgs),
}

impl Cli {
    /// Dispatch the parsed command.
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, &self.env, self.format).await,
            Commands::File(args) => file::execute(args, &self.env, self.format).await,
            Commands::Passwords(args) => passwords::execute(args, &self.env, self.format),
        }
    }
}

/// Load the merged configuration for an environment.
pub(crate) fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Build the REST client from configuration.
pub(crate) fn build_client(config: &AppConfig) -> Result<RestClient, AppError> {
    RestClient::new(&config.api)
}
