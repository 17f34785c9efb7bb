//! Addressing and Navigation Engine for the Order-5 Hyperbolic Lattice
//!
//! Every vertex of the order-5 square tessellation of the hyperbolic plane
//! has five neighbors. Instead of storing adjacency, this crate names each
//! vertex by its digit path through a canonical spanning tree and re-derives
//! adjacency from digit carries. Placements are isometries in
//! rotate-translate-rotate form, composed in closed form so long navigation
//! chains stay numerically bounded.
//!
//! # Architecture
//!
//! - **address**: `LatticeAddress`, neighbor navigation, ring enumeration
//! - **hyperbolic**: `Isometry` algebra, hyperboloid points, disc projection
//! - **graph**: `LatticeGraph` with sorted vertex and frame registries
//! - **anchor**: `AnchoredFrame`, a placement kept near its nearest vertex
//! - **scene**: renderer-facing snapshot of the frame tree
//! - **navigator**: headless tick loop driven by input scripts
//! - **config**: `LatticeConfig` with validation and TOML loading
//! - **error**: `LatticeError` and `LatticeResult`
//!
//! # Example
//!
//! ```
//! use hyperlattice_graph::{AnchoredFrame, Isometry, LatticeAddress, LatticeConfig, LatticeGraph};
//! use hyperlattice_graph::error::LatticeResult;
//!
//! fn example() -> LatticeResult<()> {
//!     let mut graph = LatticeGraph::new(LatticeConfig::default())?;
//!     let mut frame = AnchoredFrame::new(&mut graph, Isometry::new(0.5, 2.0, 0.3), LatticeAddress::Origin)?;
//!
//!     let steps = frame.rebase(&mut graph)?;
//!     assert_eq!(steps, 3);
//!     assert_eq!(frame.anchor().to_string(), "<3,0,0>");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod address;
pub mod anchor;
pub mod config;
pub mod error;
pub mod graph;
pub mod hyperbolic;
pub mod navigator;
pub mod scene;

// Re-exports for convenience
pub use address::{AddressKind, AddressRingIterator, Direction, LatticeAddress};
pub use anchor::AnchoredFrame;
pub use config::LatticeConfig;
pub use error::{LatticeError, LatticeResult};
pub use graph::{Frame, LatticeGraph, SeedReport, Vertex, VertexId};
pub use hyperbolic::{DiscPoint, HyperboloidPoint, Isometry};
pub use navigator::{parse_script, NavInput, Navigator};
pub use scene::{EdgeStroke, SceneSnapshot, VertexMark};
