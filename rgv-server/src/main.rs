//! rgv-server - HTTP API for rain gauge measurement data.

use clap::Parser;
use rgv_db::Database;
use rgv_server::{run_server, ServerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rgv-server", version, about = "Rain gauge measurement API")]
struct Cli {
    /// CSV fixture of measurements loaded at startup (timestamp,value_mm)
    #[arg(short, long)]
    data: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let csv = std::fs::read_to_string(&cli.data)?;
    let db = Database::new()?;
    db.load_measurements(&csv)?;

    run_server(db, ServerConfig { port: cli.port }).await
}
