//! CLI command implementations
//!
//! Boot sequence: arguments, tracing subscriber, configuration, schema
//! initialization, serving loop. The schema initializer runs synchronously
//! before any request is served.

use std::fs;
use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http_server::{HttpServer, HttpServerConfig, KeyMode};
use crate::store::{NaturalStore, SurrogateStore};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the server.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    init_tracing();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    serve(config)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load configuration from a JSON file; every field falls back to a default.
fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Initialize the store, then enter the serving loop.
fn serve(config: HttpServerConfig) -> CliResult<()> {
    initialize_store(&config);

    let server = HttpServer::with_config(config);
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    rt.block_on(server.start()).map_err(CliError::Server)
}

/// Ensure the observations table exists and carries the calibration rows.
///
/// Initialization failures are logged and swallowed: the server starts
/// anyway and each request surfaces the store error on its own.
fn initialize_store(config: &HttpServerConfig) {
    let result = match config.key_mode {
        KeyMode::SurrogateId => SurrogateStore::new(&config.database_path).initialize(),
        KeyMode::NaturalRadius => NaturalStore::new(&config.database_path).initialize(),
    };

    match result {
        Ok(()) => info!(
            "observation store ready at {}",
            config.database_path.display()
        ),
        Err(e) => error!("failed to initialize observation store: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_reads_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("radioprop.json");
        fs::write(&path, r#"{"port": 9000, "key_mode": "natural_radius"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.key_mode, KeyMode::NaturalRadius);
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(&tmp.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_initialize_store_swallows_failure() {
        // A directory path cannot be opened as a database; the failure is
        // logged, not returned.
        let tmp = TempDir::new().unwrap();
        let config = HttpServerConfig {
            database_path: tmp.path().to_path_buf(),
            ..Default::default()
        };
        initialize_store(&config);
    }

    #[test]
    fn test_initialize_store_seeds_both_modes() {
        let tmp = TempDir::new().unwrap();
        for (key_mode, file) in [
            (KeyMode::SurrogateId, "surrogate.db"),
            (KeyMode::NaturalRadius, "natural.db"),
        ] {
            let database_path = tmp.path().join(file);
            let config = HttpServerConfig {
                database_path: database_path.clone(),
                key_mode,
                ..Default::default()
            };
            initialize_store(&config);
            assert_eq!(SurrogateStore::new(&database_path).count().unwrap(), 14);
        }
    }
}
