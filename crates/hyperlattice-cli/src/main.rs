//! Hyperlattice CLI
//!
//! Command line inspector for the order-5 hyperbolic vertex lattice.
//!
//! # Commands
//!
//! - `ring`: List the addresses of one ring in canonical order
//! - `neighbors`: Classify an address and show its five neighbors
//! - `walk`: Replay a navigation script headlessly
//! - `scene`: Print the drawable scene after an optional script
//!
//! Exit code 0 on success, 1 on a lattice error, 2 on bad input.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use hyperlattice_graph::LatticeConfig;

mod commands;

/// Hyperlattice CLI - inspect addresses and replay walks
#[derive(Parser)]
#[command(name = "hyperlattice")]
#[command(author = "Hyperlattice Team")]
#[command(version = "0.1.0")]
#[command(about = "Inspect the order-5 hyperbolic vertex lattice")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the addresses of one ring in canonical order
    Ring(commands::ring::RingArgs),
    /// Classify an address and show its five neighbors
    ///
    /// Addresses use the display form, e.g. `<2,1,0>` or `<>` for the origin.
    Neighbors(commands::neighbors::NeighborsArgs),
    /// Replay a navigation script and print where the walker ends up
    ///
    /// Scripts are made of F (forward), B (backward), L (rotate left),
    /// R (rotate right) and `.` (idle); whitespace is ignored.
    Walk(commands::walk::WalkArgs),
    /// Print the scene snapshot after an optional navigation script
    Scene(commands::scene::SceneArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(code) => std::process::exit(code),
    };

    let exit_code = match cli.command {
        Commands::Ring(args) => commands::ring::handle_ring(args),
        Commands::Neighbors(args) => commands::neighbors::handle_neighbors(args),
        Commands::Walk(args) => commands::walk::handle_walk(args, config),
        Commands::Scene(args) => commands::scene::handle_scene(args, config),
    };

    std::process::exit(exit_code);
}

fn load_config(path: Option<&std::path::Path>) -> Result<LatticeConfig, i32> {
    let Some(path) = path else {
        return Ok(LatticeConfig::default());
    };
    match LatticeConfig::from_file(path) {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "Loaded configuration");
            Ok(config)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load configuration");
            Err(commands::EXIT_BAD_INPUT)
        }
    }
}
