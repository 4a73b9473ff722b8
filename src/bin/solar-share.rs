//! solar-share - serve daily solar production records over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use solar_share::query::http;
use solar_share::{InMemorySolarDataStore, QueryService};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "solar-share")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "SOLAR_SHARE_ADDR", default_value = "0.0.0.0:3000")]
    addr: String,

    /// JSON file holding an array of solar data records
    #[arg(long, env = "SOLAR_SHARE_DATA")]
    data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) or a full filter directive
    #[arg(long, env = "SOLAR_SHARE_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = match &args.data {
        Some(path) => InMemorySolarDataStore::load_json_file(path)
            .with_context(|| format!("failed to load solar data from {}", path.display()))?,
        None => {
            warn!("no --data file given, starting with an empty store");
            InMemorySolarDataStore::new()
        }
    };

    let service = Arc::new(QueryService::new(store));
    info!(addr = %args.addr, "starting solar-share");
    http::serve(service, &args.addr)
        .await
        .with_context(|| format!("server on {} failed", args.addr))
}
