//! CLI command handlers
//!
//! # Modules
//!
//! - `ring`: Ring enumeration
//! - `neighbors`: Address classification and neighborhood
//! - `walk`: Headless navigation replay
//! - `scene`: Scene snapshot output

pub mod neighbors;
pub mod ring;
pub mod scene;
pub mod walk;

use serde::Serialize;
use tracing::error;

use hyperlattice_graph::LatticeError;

pub const EXIT_OK: i32 = 0;
pub const EXIT_LATTICE_ERROR: i32 = 1;
pub const EXIT_BAD_INPUT: i32 = 2;

/// Exit code for a library error. Malformed user input maps to 2.
pub fn exit_code_for_error(err: &LatticeError) -> i32 {
    match err {
        LatticeError::AddressParse(_)
        | LatticeError::UnknownInput { .. }
        | LatticeError::InvalidConfig(_)
        | LatticeError::ConfigParse(_) => EXIT_BAD_INPUT,
        _ => EXIT_LATTICE_ERROR,
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            EXIT_OK
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize output");
            EXIT_LATTICE_ERROR
        }
    }
}
