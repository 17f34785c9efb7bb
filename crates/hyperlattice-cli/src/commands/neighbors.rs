//! Address classification and neighborhood command.

use clap::Args;
use serde::Serialize;
use tracing::error;

use hyperlattice_graph::address::DIRECTIONS;
use hyperlattice_graph::{AddressKind, Direction, LatticeAddress};

use super::{exit_code_for_error, print_json, EXIT_OK};

/// Arguments for the neighbors command.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Address in display form, e.g. `<2,1,0>`
    pub address: String,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct NeighborEntry {
    direction: Direction,
    address: LatticeAddress,
    kind: AddressKind,
    /// Direction leading back, when the step is defined.
    return_direction: Option<Direction>,
    child: bool,
}

#[derive(Serialize)]
struct NeighborsOutput {
    address: LatticeAddress,
    kind: AddressKind,
    parent: Option<LatticeAddress>,
    leaf_direction: Direction,
    neighbors: Vec<NeighborEntry>,
}

fn describe(address: LatticeAddress) -> NeighborsOutput {
    let neighbors = (0..DIRECTIONS)
        .map(|direction| {
            let next = address.neighbor(direction);
            NeighborEntry {
                direction,
                kind: next.kind(),
                address: next,
                return_direction: address.direction_after_travel(direction),
                child: address.is_child_direction(direction),
            }
        })
        .collect();
    NeighborsOutput {
        kind: address.kind(),
        parent: address.parent(),
        leaf_direction: address.leaf_direction(),
        neighbors,
        address,
    }
}

/// Execute the neighbors command.
///
/// # Returns
///
/// Exit code:
/// - 0: Success (also for an INVALID address, which is reported as such)
/// - 2: Address text could not be parsed
pub fn handle_neighbors(args: NeighborsArgs) -> i32 {
    let address: LatticeAddress = match args.address.parse() {
        Ok(address) => address,
        Err(e) => {
            error!(input = %args.address, error = %e, "Bad address");
            return exit_code_for_error(&e);
        }
    };

    let output = describe(address);
    if args.json {
        return print_json(&output);
    }

    println!("{} ({:?})", output.address, output.kind);
    match &output.parent {
        Some(parent) => println!("  parent: {}", parent),
        None => println!("  parent: -"),
    }
    println!("  leaf direction: {}", output.leaf_direction);
    for entry in &output.neighbors {
        let back = entry
            .return_direction
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "  {} -> {:<16} {:<8} back {}{}",
            entry.direction,
            entry.address.to_string(),
            format!("{:?}", entry.kind),
            back,
            if entry.child { "  child" } else { "" }
        );
    }
    EXIT_OK
}
