//! Headless navigation replay.

use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use hyperlattice_graph::{Isometry, LatticeAddress, LatticeConfig, LatticeResult, Navigator};

use super::{exit_code_for_error, print_json, EXIT_OK};

/// Arguments for the walk command.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Navigation script, e.g. `FFFFLLFF`
    #[arg(short, long, default_value = "")]
    pub script: String,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct WalkOutput {
    ticks: u64,
    moves: usize,
    anchor: LatticeAddress,
    relative: Isometry,
    distance: f64,
    vertices: usize,
}

fn replay(script: &str, config: LatticeConfig) -> LatticeResult<WalkOutput> {
    let mut nav = Navigator::new(config)?;
    let moves = nav.run_script(script)?;
    let relative = *nav.frame().relative();
    Ok(WalkOutput {
        ticks: nav.ticks(),
        moves,
        anchor: nav.frame().anchor().clone(),
        distance: relative.translation_magnitude(),
        relative,
        vertices: nav.graph().vertex_count(),
    })
}

/// Execute the walk command.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Navigation failed
/// - 2: Script contains an unknown symbol
pub fn handle_walk(args: WalkArgs, config: LatticeConfig) -> i32 {
    let output = match replay(&args.script, config) {
        Ok(output) => output,
        Err(e) => {
            error!(error = %e, "Walk failed");
            return exit_code_for_error(&e);
        }
    };
    info!(anchor = %output.anchor, moves = output.moves, "Walk finished");

    if args.json {
        return print_json(&output);
    }

    println!("ticks:    {}", output.ticks);
    println!("moves:    {}", output.moves);
    println!("anchor:   {}", output.anchor);
    println!(
        "relative: n={:.6} s={:.6} m={:.6}",
        output.relative.n, output.relative.s, output.relative.m
    );
    println!("distance: {:.6}", output.distance);
    println!("vertices: {}", output.vertices);
    EXIT_OK
}
