//! # HTTP Server
//!
//! Axum routes and server assembly for the observations API.

mod config;
mod natural_routes;
mod server;
mod surrogate_routes;

pub use config::{HttpServerConfig, KeyMode};
pub use natural_routes::{natural_routes, NaturalState};
pub use server::HttpServer;
pub use surrogate_routes::{surrogate_routes, SurrogateState};
