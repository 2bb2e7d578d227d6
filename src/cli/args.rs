//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// radioprop - a record-keeping service for radio propagation observations
#[derive(Parser, Debug)]
#[command(name = "radioprop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
