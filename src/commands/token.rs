//! Token command - Prints a bearer token for calling secure endpoints.

use crate::cli::args::TokenArgs;
use crate::config::Config;
use crate::domain::UserId;
use crate::errors::{AppError, AppResult};
use crate::services::{AuthService, Authenticator};

/// Execute the token command
pub async fn execute(args: TokenArgs, config: Config) -> AppResult<()> {
    let user_id = UserId::new(args.user_id);
    let token = Authenticator::new(config).issue_token(&user_id)?;
    tracing::debug!(user = %user_id, expires_in = token.expires_in, "Token issued");

    let json = serde_json::to_string_pretty(&token)
        .map_err(|e| AppError::internal(format!("Failed to encode token: {}", e)))?;
    println!("{}", json);

    Ok(())
}
