//! CLI command definitions and dispatch.

pub mod hobby;
pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use hobbylink_core::config::AppConfig;
use hobbylink_core::error::AppError;

/// HobbyLink — hobby-based social platform
#[derive(Debug, Parser)]
#[command(name = "hobbylink", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
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
    /// Start the HobbyLink server
    Serve(serve::ServeArgs),
    /// Run pending database migrations
    Migrate,
    /// User account management
    User(user::UserArgs),
    /// Hobby catalog management
    Hobby(hobby::HobbyArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate => migrate::execute(&self.env).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
            Commands::Hobby(args) => hobby::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    hobbylink_database::connection::create_pool(&config.database).await
}
