//! Plain-text rendering of shortest-path results.
//!
//! ```text
//! Shortest distances from source 0:
//! Vertex 0: 0
//! Vertex 1: -1
//! Vertex 2: INF
//! ```
//!
//! A run that found a negative cycle renders as the single line
//! `Negative cycle detected!` since its distances are not meaningful.

use crate::algorithms::bellman_ford::ShortestPaths;
use std::fmt::{self, Write};

/// Token printed for unreachable vertices.
pub const UNREACHABLE: &str = "INF";

/// Borrowing wrapper that implements `Display` for a result.
pub struct Report<'a> {
    pub source: usize,
    pub result: &'a ShortestPaths,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.result.has_negative_cycle {
            return writeln!(f, "Negative cycle detected!");
        }

        writeln!(f, "Shortest distances from source {}:", self.source)?;
        for (vertex, distance) in self.result.distances.iter().enumerate() {
            match distance {
                Some(d) => writeln!(f, "Vertex {}: {}", vertex, d)?,
                None => writeln!(f, "Vertex {}: {}", vertex, UNREACHABLE)?,
            }
        }
        Ok(())
    }
}

/// Render a result as text.
pub fn render(source: usize, result: &ShortestPaths) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", Report { source, result });
    out
}
