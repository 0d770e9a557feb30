use std::path::PathBuf;

use clap::Parser;

/// Airwave radio backend
#[derive(Debug, Parser)]
#[command(name = "airwave", about = "Track intros and speech synthesis for a web radio")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "airwave.toml", env = "AIRWAVE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "AIRWAVE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
