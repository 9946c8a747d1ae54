//! Bellman-Ford single-source shortest paths with negative-cycle detection.
//!
//! Edge weights may be negative. Distances are `Option<i64>`, with `None`
//! standing for "unreachable" so no numeric sentinel can collide with a
//! real path length.
//!
//! The relaxation phase runs V-1 rounds over the edge list in input order.
//! Within a round an improved distance is visible to every later edge of
//! the same round; a path whose edges appear in list order therefore
//! settles in a single round. One extra pass then looks for an edge that
//! still relaxes, which happens exactly when a negative cycle is reachable
//! from the source.

use crate::error::ShortestPathError;
use crate::graph::Edge;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Configuration for the relaxation engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BellmanFordConfig {
    /// Stop the relaxation phase after the first round that changes nothing.
    /// Distances and the cycle flag are unaffected; only `rounds` shrinks.
    pub early_termination: bool,
}

/// Result of a shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// Distance from the source per vertex; `None` if unreachable.
    /// Not meaningful when `has_negative_cycle` is set.
    pub distances: Vec<Option<i64>>,
    /// A negative-weight cycle is reachable from the source.
    pub has_negative_cycle: bool,
    /// Relaxation rounds actually executed.
    pub rounds: usize,
}

impl ShortestPaths {
    /// Distance to `vertex`, or `None` if unreachable or out of range.
    pub fn distance_to(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Number of vertices with a finite distance (the source included).
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Compute shortest distances from `source` using the default configuration.
///
/// # Arguments
/// * `vertex_count` - Number of vertices V; vertices are `0..V`
/// * `edges` - Directed weighted edges, relaxed in slice order
/// * `source` - Start vertex
///
/// # Errors
/// `InvalidArgument` kind if V is zero, `source >= V`, or any edge endpoint
/// is `>= V`. `Overflow` kind if a finite distance plus a weight leaves the
/// `i64` range.
pub fn shortest_paths(
    vertex_count: usize,
    edges: &[Edge],
    source: usize,
) -> Result<ShortestPaths, ShortestPathError> {
    shortest_paths_with_config(vertex_count, edges, source, &BellmanFordConfig::default())
}

/// Compute shortest distances from `source` with an explicit configuration.
pub fn shortest_paths_with_config(
    vertex_count: usize,
    edges: &[Edge],
    source: usize,
    config: &BellmanFordConfig,
) -> Result<ShortestPaths, ShortestPathError> {
    validate(vertex_count, edges, source)?;

    debug!(
        "bellman-ford: {} vertices, {} edges, source {}",
        vertex_count,
        edges.len(),
        source
    );

    let mut distances: Vec<Option<i64>> = vec![None; vertex_count];
    distances[source] = Some(0);

    let mut rounds = 0;
    for round in 1..vertex_count {
        let updated = relax_round(&mut distances, edges)?;
        rounds += 1;
        trace!("round {}: updated = {}", round, updated);

        if config.early_termination && !updated {
            break;
        }
    }

    // Pass V: any edge that still relaxes sits on or behind a negative cycle
    let mut has_negative_cycle = false;
    for edge in edges {
        if relaxation(&distances, edge)?.is_some() {
            debug!(
                "bellman-ford: edge {} -> {} still relaxes, negative cycle",
                edge.from, edge.to
            );
            has_negative_cycle = true;
            break;
        }
    }

    debug!(
        "bellman-ford: finished after {} rounds, negative cycle = {}",
        rounds, has_negative_cycle
    );

    Ok(ShortestPaths {
        distances,
        has_negative_cycle,
        rounds,
    })
}

/// Check whether a negative cycle is reachable from `source`.
pub fn has_negative_cycle(
    vertex_count: usize,
    edges: &[Edge],
    source: usize,
) -> Result<bool, ShortestPathError> {
    Ok(shortest_paths(vertex_count, edges, source)?.has_negative_cycle)
}

/// Reject inputs the engine cannot index safely.
fn validate(vertex_count: usize, edges: &[Edge], source: usize) -> Result<(), ShortestPathError> {
    if vertex_count == 0 {
        return Err(ShortestPathError::EmptyGraph);
    }
    if source >= vertex_count {
        return Err(ShortestPathError::SourceOutOfRange {
            vertex: source,
            vertex_count,
        });
    }
    if let Some((index, edge)) = edges
        .iter()
        .enumerate()
        .find(|(_, e)| e.from >= vertex_count || e.to >= vertex_count)
    {
        return Err(ShortestPathError::EdgeOutOfRange {
            index,
            from: edge.from,
            to: edge.to,
            vertex_count,
        });
    }
    Ok(())
}

/// One pass over all edges, updating in place. Returns whether anything changed.
fn relax_round(distances: &mut [Option<i64>], edges: &[Edge]) -> Result<bool, ShortestPathError> {
    let mut updated = false;
    for edge in edges {
        if let Some(candidate) = relaxation(distances, edge)? {
            distances[edge.to] = Some(candidate);
            updated = true;
        }
    }
    Ok(updated)
}

/// Improved distance for `edge.to` through `edge`, if the edge relaxes.
///
/// Unreachable tails never relax, so no arithmetic happens on `None`.
/// The comparison is strict: zero-weight cycles never relax.
fn relaxation(distances: &[Option<i64>], edge: &Edge) -> Result<Option<i64>, ShortestPathError> {
    let Some(from_dist) = distances[edge.from] else {
        return Ok(None);
    };

    let Some(candidate) = from_dist.checked_add(edge.weight) else {
        // Past i64::MAX never beats a finite distance
        if edge.weight > 0 && distances[edge.to].is_some() {
            return Ok(None);
        }
        return Err(ShortestPathError::DistanceOverflow {
            from: edge.from,
            to: edge.to,
        });
    };

    match distances[edge.to] {
        Some(current) if current <= candidate => Ok(None),
        _ => Ok(Some(candidate)),
    }
}
