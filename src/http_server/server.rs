//! # HTTP Server
//!
//! Main HTTP server assembling the observation routes for the configured
//! key mode.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::{HttpServerConfig, KeyMode};
use super::natural_routes::{natural_routes, NaturalState};
use super::surrogate_routes::{surrogate_routes, SurrogateState};

/// HTTP server for the observations API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router for the configured key mode
    fn build_router(config: &HttpServerConfig) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let observations = match config.key_mode {
            KeyMode::SurrogateId => {
                surrogate_routes(Arc::new(SurrogateState::new(&config.database_path)))
            }
            KeyMode::NaturalRadius => {
                natural_routes(Arc::new(NaturalState::new(&config.database_path)))
            }
        };

        Router::new()
            .nest("/observations", observations)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        info!("starting radioprop HTTP server on {}", addr);
        info!(
            "observations API at http://{}/observations/ ({:?} keys, store {})",
            addr,
            self.config.key_mode,
            self.config.database_path.display()
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_for_both_key_modes() {
        for key_mode in [KeyMode::SurrogateId, KeyMode::NaturalRadius] {
            let config = HttpServerConfig {
                key_mode,
                ..Default::default()
            };
            let _router = HttpServer::with_config(config).router();
        }
    }
}
