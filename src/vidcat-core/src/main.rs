//! vidcat - video catalog HTTP service
//!
//! CRUD over a collection of video metadata records backed by a flat
//! JSON file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

use config::Config;
use vidcat_store::VideoStore;

#[derive(Parser)]
#[command(name = "vidcat")]
#[command(about = "Video catalog CRUD service over a flat-file store")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Seed file with the initial collection
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Snapshot file rewritten after every mutation
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Web server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a seed file and print a summary
    Check {
        /// Seed file with the initial collection
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            seed,
            snapshot,
            port,
        } => {
            cmd_serve(config, seed, snapshot, port)?;
        }
        Commands::Check { seed } => {
            cmd_check(config, seed)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn cmd_serve(
    config: Config,
    seed: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    port: Option<u16>,
) -> Result<()> {
    let seed = seed.unwrap_or(config.seed_file);
    let snapshot = snapshot.unwrap_or(config.snapshot_file);
    let port = port.unwrap_or(config.port);

    info!("seed file: {:?}", seed);
    info!("snapshot file: {:?}", snapshot);

    let store = VideoStore::load(&seed, snapshot)?;

    tokio::runtime::Runtime::new()?.block_on(vidcat_web::serve(store, port))
}

fn cmd_check(config: Config, seed: Option<PathBuf>) -> Result<()> {
    let seed = seed.unwrap_or(config.seed_file);

    if !seed.exists() {
        println!("seed: {:?} not found", seed);
        return Ok(());
    }

    let videos = vidcat_store::snapshot::read_collection(&seed)?;

    let folders: BTreeSet<&str> = videos.iter().map(|v| v.folder.as_str()).collect();
    let tags: BTreeSet<&str> = videos
        .iter()
        .flat_map(|v| v.tags.iter())
        .map(String::as_str)
        .collect();

    println!("seed: {:?}", seed);
    println!("videos: {}", videos.len());
    println!("distinct folders: {}", folders.len());
    println!("distinct tags: {}", tags.len());

    Ok(())
}
