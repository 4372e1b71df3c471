//! Hobby catalog CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use hobbylink_core::error::AppError;
use hobbylink_database::repositories::HobbyRepository;
use hobbylink_database::store::HobbyCatalog;

use crate::output::{self, OutputFormat};

/// Arguments for hobby commands
#[derive(Debug, Args)]
pub struct HobbyArgs {
    /// Hobby subcommand
    #[command(subcommand)]
    pub command: HobbyCommand,
}

/// Hobby subcommands
#[derive(Debug, Subcommand)]
pub enum HobbyCommand {
    /// List the hobby catalog
    List,
}

/// Hobby display row for table output
#[derive(Debug, Serialize, Tabled)]
struct HobbyRow {
    /// Hobby ID
    id: String,
    /// Name
    name: String,
    /// Category
    category: String,
}

/// Execute hobby commands
pub async fn execute(args: &HobbyArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let catalog = HobbyRepository::new(pool);

    match &args.command {
        HobbyCommand::List => {
            let hobbies = catalog.list().await?;

            let rows: Vec<HobbyRow> = hobbies
                .iter()
                .map(|h| HobbyRow {
                    id: h.id.to_string(),
                    name: h.name.clone(),
                    category: h.category.clone().unwrap_or_default(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
