// ABOUTME: Extension catalog operations for the AI Engine database
// ABOUTME: Ensures required extensions idempotently and raises the startup notice

use std::collections::HashSet;

use anyhow::{Context, Result};
use tokio_postgres::Client;

/// Extensions the AI Engine schema depends on: UUID generation for primary
/// keys and trigram indexing for text search.
pub const REQUIRED_EXTENSIONS: &[&str] = &["uuid-ossp", "pg_trgm"];

/// Confirmation notice raised on the server's notice channel after a
/// successful bootstrap. Fixed literal, not configurable.
pub const STARTUP_NOTICE: &str = "Base de datos AI Engine inicializada correctamente";

#[derive(Debug, Clone)]
pub struct Extension {
    pub name: String,
    pub version: String,
}

/// Get list of installed extensions on a database
pub async fn get_installed_extensions(client: &Client) -> Result<Vec<Extension>> {
    let rows = client
        .query(
            "SELECT extname, extversion FROM pg_extension WHERE extname != 'plpgsql' ORDER BY extname",
            &[],
        )
        .await
        .context("Failed to query installed extensions")?;

    let extensions = rows
        .iter()
        .map(|row| Extension {
            name: row.get(0),
            version: row.get(1),
        })
        .collect();

    Ok(extensions)
}

/// Get the names of extension modules available in this server build
pub async fn get_available_extension_names(client: &Client) -> Result<HashSet<String>> {
    let rows = client
        .query("SELECT name FROM pg_available_extensions", &[])
        .await
        .context("Failed to query available extensions")?;

    Ok(rows.iter().map(|row| row.get(0)).collect())
}

/// Required extensions missing from the set of available modules
pub fn missing_required_extensions(available: &HashSet<String>) -> Vec<&'static str> {
    REQUIRED_EXTENSIONS
        .iter()
        .copied()
        .filter(|name| !available.contains(*name))
        .collect()
}

/// Install an extension into the current database. No-op if already installed.
///
/// Relies on the engine's own `IF NOT EXISTS` semantics, which also makes
/// concurrent invocations safe.
pub async fn create_extension_if_not_exists(client: &Client, name: &str) -> Result<()> {
    let query = format!("CREATE EXTENSION IF NOT EXISTS {}", quote_ident(name));

    client
        .batch_execute(&query)
        .await
        .with_context(|| format!("Failed to create extension '{}'", name))?;

    Ok(())
}

/// Raise the fixed startup notice on the server's notice channel
pub async fn emit_startup_notice(client: &Client) -> Result<()> {
    client
        .batch_execute(&startup_notice_statement())
        .await
        .context("Failed to emit startup notice")?;

    Ok(())
}

/// The DO block that raises the startup notice
fn startup_notice_statement() -> String {
    format!(
        "DO $$ BEGIN RAISE NOTICE '{}'; END $$",
        STARTUP_NOTICE.replace('\'', "''")
    )
}

/// Quote an identifier for DDL ('uuid-ossp' contains a hyphen)
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("pg_trgm"), "\"pg_trgm\"");
        assert_eq!(quote_ident("uuid-ossp"), "\"uuid-ossp\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_required_extensions() {
        assert!(REQUIRED_EXTENSIONS.contains(&"uuid-ossp"));
        assert!(REQUIRED_EXTENSIONS.contains(&"pg_trgm"));
        assert_eq!(REQUIRED_EXTENSIONS.len(), 2);
    }

    #[test]
    fn test_missing_required_extensions_all_available() {
        let available: HashSet<String> = ["uuid-ossp", "pg_trgm", "pgcrypto"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(missing_required_extensions(&available).is_empty());
    }

    #[test]
    fn test_missing_required_extensions_reports_missing() {
        let available: HashSet<String> = ["pg_trgm"].iter().map(|s| s.to_string()).collect();
        assert_eq!(missing_required_extensions(&available), vec!["uuid-ossp"]);

        let empty = HashSet::new();
        assert_eq!(
            missing_required_extensions(&empty),
            vec!["uuid-ossp", "pg_trgm"]
        );
    }

    #[test]
    fn test_startup_notice_is_sql_safe() {
        // The literal is embedded in a DO block; a stray quote would break it
        assert!(!STARTUP_NOTICE.contains('\''));
    }

    #[test]
    fn test_startup_notice_statement() {
        assert_eq!(
            startup_notice_statement(),
            "DO $$ BEGIN RAISE NOTICE 'Base de datos AI Engine inicializada correctamente'; END $$"
        );
    }
}
