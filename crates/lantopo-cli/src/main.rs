//! `lantopo` - interactive topology builder for small computer networks.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lantopo_core::{NetworkGraph, Settings};

mod repl;
mod repl_commands;
mod seed;

/// LanTopo - model a network topology and find cheapest routes
#[derive(Parser, Debug)]
#[command(name = "lantopo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of devices the topology may hold
    #[arg(short, long, env = "LANTOPO_GRAPH_CAPACITY")]
    capacity: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long, env = "LANTOPO_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let capacity = args.capacity.unwrap_or(settings.graph.capacity);
    tracing::info!(capacity, "starting topology session");

    let graph = NetworkGraph::new(capacity);
    repl::run(graph)
}
