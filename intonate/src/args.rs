use std::path::PathBuf;

use clap::Parser;

/// Intonate speech service
#[derive(Debug, Parser)]
#[command(name = "intonate", about = "Emotion-aware text-to-speech HTTP service")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "intonate.toml", env = "INTONATE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "INTONATE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
