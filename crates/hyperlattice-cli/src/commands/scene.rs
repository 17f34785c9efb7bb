//! Scene snapshot command.

use clap::Args;
use tracing::{error, info};

use hyperlattice_graph::{LatticeConfig, LatticeResult, Navigator, SceneSnapshot};

use super::{exit_code_for_error, print_json, EXIT_OK};

/// Arguments for the scene command.
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Navigation script to replay before capturing
    #[arg(short, long, default_value = "")]
    pub script: String,

    /// Output the full snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

fn capture(script: &str, config: LatticeConfig) -> LatticeResult<SceneSnapshot> {
    let mut nav = Navigator::new(config)?;
    nav.run_script(script)?;
    nav.snapshot()
}

/// Execute the scene command.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Capture failed
/// - 2: Script contains an unknown symbol
pub fn handle_scene(args: SceneArgs, config: LatticeConfig) -> i32 {
    let scene = match capture(&args.script, config) {
        Ok(scene) => scene,
        Err(e) => {
            error!(error = %e, "Scene capture failed");
            return exit_code_for_error(&e);
        }
    };
    info!(
        origin = %scene.walker_origin,
        marks = scene.marks.len(),
        edges = scene.edges.len(),
        "Captured scene"
    );

    if args.json {
        return print_json(&scene);
    }

    println!("walker origin: {}", scene.walker_origin);
    for mark in &scene.marks {
        println!(
            "  {:<16} at {:<18} screen ({:8.2}, {:8.2}) r={:.2}",
            mark.label,
            mark.frame.to_string(),
            mark.screen[0],
            mark.screen[1],
            mark.radius
        );
    }
    println!("{} marks, {} edges", scene.marks.len(), scene.edges.len());
    EXIT_OK
}
