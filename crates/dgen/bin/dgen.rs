//! Dungeon generator
//!
//! Prints one dungeon, or serves them over HTTP with `--server`.

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use dgen::cli::{self, Args};
use dgen::server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    if !args.server {
        return cli::run(&args);
    }

    let config = ServerConfig::new(args.host.clone(), args.port);
    Server::new(config).run().await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dgen=info,dgen_core=info,tower_http=info"));

    // Logs go to stderr; stdout carries the dungeon
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
