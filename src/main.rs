//! nodegrid - replay mutation scripts against a fresh node store
//!
//! Builds a store, optionally seeds the demo nodes, applies a JSON mutation
//! script and prints the resulting state as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use nodegrid::{MutationScript, NodeGraphStore, StoreConfig};

#[derive(Parser, Debug)]
#[command(name = "nodegrid", version, about = "Replay node editor mutations and print the resulting state")]
struct Args {
    /// JSON store configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the demo nodes before replaying
    #[arg(long)]
    seed: bool,

    /// JSON array of mutations to apply
    script: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    let mut store = NodeGraphStore::with_config(config);

    if args.seed {
        store.seed_demo_data()?;
    }
    if let Some(path) = &args.script {
        MutationScript::load(path)?.apply(&mut store)?;
    }

    println!("{}", store.snapshot_json()?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
