use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nav",
    about = "Navigation dashboard: a self-hosted catalog of links",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the dashboard HTTP server
    Serve(ServeArgs),
    /// Print the digest to store in `admin.password_hash`
    HashPassword(HashPasswordArgs),
    /// Summarize a dataset file
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// TOML config file; flags and env override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen address
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Listen port, applied on top of the bind address
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
    /// Dataset file
    #[arg(short, long, env = "NAV_DATA_PATH")]
    pub data: Option<PathBuf>,
    /// Mark the session cookie Secure
    #[arg(long)]
    pub cookie_secure: bool,
}

#[derive(Args, Debug)]
pub struct HashPasswordArgs {
    pub password: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[arg(short, long, default_value = nav_store::DEFAULT_DATA_FILE)]
    pub data: PathBuf,
}
