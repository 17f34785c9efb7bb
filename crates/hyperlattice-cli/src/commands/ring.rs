//! Ring enumeration command.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use hyperlattice_graph::{AddressRingIterator, LatticeAddress};

use super::{print_json, EXIT_BAD_INPUT, EXIT_LATTICE_ERROR, EXIT_OK};

/// Largest accepted radius. Ring sizes grow by about 2.6 per level; ring 16
/// already holds several million addresses.
pub const MAX_RING_RADIUS: usize = 16;

/// Arguments for the ring command.
#[derive(Args, Debug)]
pub struct RingArgs {
    /// Ring radius (address depth), at most 16
    #[arg(short, long, default_value = "1")]
    pub radius: usize,

    /// Output as JSON instead of one address per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RingOutput {
    radius: usize,
    count: usize,
    addresses: Vec<LatticeAddress>,
}

/// Reject radii whose rings are too large to enumerate.
fn check_radius(radius: usize) -> Result<(), i32> {
    if radius > MAX_RING_RADIUS {
        error!(
            radius,
            max = MAX_RING_RADIUS,
            "Ring radius exceeds the enumeration limit"
        );
        return Err(EXIT_BAD_INPUT);
    }
    Ok(())
}

/// Write one address per line, returning how many were written.
fn write_ring<W: Write>(out: &mut W, radius: usize) -> io::Result<usize> {
    let mut count = 0;
    for address in AddressRingIterator::new(radius) {
        writeln!(out, "{}", address)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Execute the ring command.
///
/// Text output is streamed; JSON output is collected first.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Output could not be written
/// - 2: Radius above [`MAX_RING_RADIUS`]
pub fn handle_ring(args: RingArgs) -> i32 {
    if let Err(code) = check_radius(args.radius) {
        return code;
    }

    if args.json {
        let addresses: Vec<LatticeAddress> = AddressRingIterator::new(args.radius).collect();
        info!(radius = args.radius, count = addresses.len(), "Enumerated ring");
        return print_json(&RingOutput {
            radius: args.radius,
            count: addresses.len(),
            addresses,
        });
    }

    let stdout = io::stdout();
    match write_ring(&mut stdout.lock(), args.radius) {
        Ok(count) => {
            info!(radius = args.radius, count, "Enumerated ring");
            EXIT_OK
        }
        Err(e) => {
            error!(error = %e, "Failed to write ring");
            EXIT_LATTICE_ERROR
        }
    }
}
