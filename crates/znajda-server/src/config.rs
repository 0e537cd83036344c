use std::path::PathBuf;

use clap::Parser;

/// Server configuration parsed from command line arguments and
/// environment variables.
#[derive(Parser, Debug)]
#[command(name = "znajda-server")]
#[command(author, version, about = "REST API server for the Znajda lost-and-found catalog")]
pub struct ServerConfig {
    /// Directory holding the published dataset files
    #[arg(long, env = "DATASET_DIR", default_value = "datasets")]
    pub dataset_dir: PathBuf,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Allowed CORS origins ("*" for any, or a comma-separated list)
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}
