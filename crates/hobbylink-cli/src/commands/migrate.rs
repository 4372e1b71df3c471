//! Database migration management.

use hobbylink_core::error::AppError;

use crate::output;

/// Execute the migrate command
pub async fn execute(env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    println!("Running database migrations...");
    hobbylink_database::migration::run_migrations(&pool).await?;
    output::print_success("All migrations applied successfully.");

    Ok(())
}
