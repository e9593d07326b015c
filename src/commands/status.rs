// ABOUTME: Status command implementation - Report extension catalog state
// ABOUTME: Read-only check of which required extensions are installed

use crate::{postgres, utils};
use anyhow::{Context, Result};

/// Report which required extensions are installed on the target database
///
/// Read-only: queries pg_extension and prints one line per required
/// extension. Succeeds whether or not the database has been bootstrapped.
pub async fn status(database_url: &str) -> Result<()> {
    utils::validate_connection_string(database_url)?;

    tracing::info!("Connecting to database...");
    let client = postgres::connect(database_url)
        .await
        .context("Failed to connect to target database")?;

    let installed = postgres::get_installed_extensions(&client)
        .await
        .context("Failed to read extension catalog")?;

    let mut all_present = true;
    for name in postgres::REQUIRED_EXTENSIONS {
        match installed.iter().find(|ext| ext.name == *name) {
            Some(ext) => {
                tracing::info!("✓ '{}' installed (version {})", ext.name, ext.version);
            }
            None => {
                all_present = false;
                tracing::warn!("✗ '{}' not installed", name);
            }
        }
    }

    if all_present {
        tracing::info!("✅ Database is initialized");
    } else {
        tracing::warn!("⚠ Database is not initialized - run the init command");
    }

    Ok(())
}
