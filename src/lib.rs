//! Single-source shortest paths for weighted digraphs with negative edges.
//!
//! The core is a Bellman-Ford relaxation engine that reports distances from
//! a source plus whether a negative-weight cycle reachable from that source
//! makes those distances meaningless. The same engine is exposed to
//! JavaScript through [`WeightedDiGraph`].
//!
//! ```
//! use sssp_graph_wasm::{shortest_paths, Edge};
//!
//! let edges = [Edge::new(0, 1, -1), Edge::new(1, 2, 3), Edge::new(0, 2, 4)];
//! let result = shortest_paths(4, &edges, 0).unwrap();
//!
//! assert!(!result.has_negative_cycle);
//! assert_eq!(result.distances, vec![Some(0), Some(-1), Some(2), None]);
//! ```

use wasm_bindgen::prelude::*;

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod report;

pub use algorithms::bellman_ford::{
    shortest_paths, shortest_paths_with_config, BellmanFordConfig, ShortestPaths,
};
pub use error::{ErrorKind, ShortestPathError};
pub use graph::{Edge, GraphSnapshot, WeightedDiGraph};

/// Module initialization: route Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Library version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
