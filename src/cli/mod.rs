//! CLI module for radioprop
//!
//! There is no command surface beyond starting the HTTP listener: parse the
//! arguments, load configuration, initialize the store, serve.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::run;
pub use errors::{CliError, CliResult};
