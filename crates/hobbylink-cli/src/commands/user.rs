//! User account management CLI commands.

use clap::{Args, Subcommand};

use hobbylink_auth::password::{PasswordHasher, PasswordValidator};
use hobbylink_core::error::AppError;
use hobbylink_database::repositories::UserRepository;
use hobbylink_database::store::UserStore;
use hobbylink_entity::user::NewUser;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a new account
    Create {
        /// Username
        username: String,
        /// Email address
        email: String,
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Show an account by username or email
    Show {
        /// Username or email
        identifier: String,
    },
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    env: &str,
    _format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::Create {
            username,
            email,
            first_name,
            last_name,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            PasswordValidator::new(&config.auth).validate(&password)?;
            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let new_user = NewUser {
                username: username.clone(),
                email: email.clone(),
                password_hash,
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                phone_number: None,
                date_of_birth: None,
                profile_image_url: None,
            };

            let user = user_repo.create_with_hobbies(&new_user, &[]).await?;
            output::print_success(&format!("User '{}' created ({})", user.username, user.id));
        }
        UserCommand::Show { identifier } => {
            let user = user_repo
                .find_by_identifier(identifier)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{}' not found", identifier)))?;

            let hobbies = user_repo.hobbies_of(user.id).await?;

            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Username", &user.username);
            output::print_kv("Email", &user.email);
            output::print_kv("Name", &user.full_name());
            output::print_kv("Active", &user.is_active.to_string());
            output::print_kv("Verified", &user.is_verified.to_string());
            output::print_kv("Joined", &user.join_date.format("%Y-%m-%d %H:%M").to_string());
            output::print_kv(
                "Last login",
                &user
                    .last_login_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "never".to_string()),
            );
            output::print_kv(
                "Hobbies",
                &hobbies
                    .iter()
                    .map(|h| h.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }
    }

    Ok(())
}
