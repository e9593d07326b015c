// ABOUTME: Bootstrap command for the AI Engine database
// ABOUTME: Ensures required extensions and raises the startup notice

use crate::{postgres, utils};
use anyhow::{bail, Context, Result};
use tokio_postgres::Client;

/// Bootstrap the AI Engine database
///
/// Runs the one-time initialization sequence in steps:
/// 1. Checks that all required extension modules are available on the server
/// 2. Installs each required extension (no-op when already installed)
/// 3. Raises the confirmation notice on the server's notice channel
///
/// The sequence is idempotent: running it against an already-initialized
/// database succeeds and leaves the extension catalog unchanged. The notice
/// is only emitted after both extensions are ensured, never on a failure path.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string for the target database
///
/// # Errors
///
/// This function will return an error if:
/// - The connection string is malformed
/// - Cannot connect to the target database
/// - A required extension module is not available in the server build
/// - Extension creation or notice emission fails
pub async fn init(database_url: &str) -> Result<()> {
    utils::validate_connection_string(database_url)?;

    tracing::info!("Starting database bootstrap...");

    tracing::info!("Connecting to database...");
    let client = postgres::connect_with_retry(database_url)
        .await
        .context("Failed to connect to target database")?;
    tracing::info!("✓ Connected");

    bootstrap(&client).await
}

/// Run the bootstrap sequence over an established connection
pub async fn bootstrap(client: &Client) -> Result<()> {
    // Step 1: Pre-flight check against pg_available_extensions
    tracing::info!("Step 1/3: Checking extension availability...");
    let available = postgres::get_available_extension_names(client).await?;
    let missing = postgres::missing_required_extensions(&available);
    if !missing.is_empty() {
        bail!(
            "Required extension module(s) not available on this server: {}.\n\
             Install the PostgreSQL contrib package on the server and retry.",
            missing.join(", ")
        );
    }
    tracing::info!("✓ All required extension modules are available");

    // Step 2: Ensure extensions
    tracing::info!("Step 2/3: Ensuring extensions...");
    for name in postgres::REQUIRED_EXTENSIONS {
        postgres::create_extension_if_not_exists(client, name).await?;
        tracing::info!("✓ Extension '{}' present", name);
    }

    // Step 3: Confirmation notice, forwarded into the log by the connection task
    tracing::info!("Step 3/3: Emitting startup notice...");
    postgres::emit_startup_notice(client).await?;

    tracing::info!("✅ Database bootstrap complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_with_invalid_url_fails() {
        let result = init("invalid-url").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore]
    async fn test_init_is_idempotent() {
        let url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set for integration tests");

        assert!(init(&url).await.is_ok());
        assert!(init(&url).await.is_ok());
    }
}
