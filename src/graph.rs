//! Weighted directed graph stored as an ordered edge list.

use crate::algorithms::bellman_ford::{self, BellmanFordConfig, ShortestPaths};
use crate::error::ShortestPathError;
use crate::report;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Directed edge `from -> to` with a signed weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Edge { from, to, weight }
    }
}

/// Weighted directed graph over vertices `0..vertex_count`.
///
/// Edges keep insertion order, which is also the order the relaxation
/// engine scans them. Parallel edges and self-loops are kept as-is.
#[wasm_bindgen]
pub struct WeightedDiGraph {
    vertex_count: usize,

    /// Edges in insertion order
    edges: Vec<Edge>,

    /// out_degree[u] = number of edges leaving u
    out_degree: Vec<usize>,

    /// in_degree[v] = number of edges entering v
    in_degree: Vec<usize>,
}

/// Serializable graph snapshot for import/export.
#[derive(Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

#[wasm_bindgen]
impl WeightedDiGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[wasm_bindgen(constructor)]
    pub fn new(vertex_count: usize) -> WeightedDiGraph {
        WeightedDiGraph::with_capacity(vertex_count, 0)
    }

    /// Create a graph with pre-allocated edge capacity.
    #[wasm_bindgen(js_name = withCapacity)]
    pub fn with_capacity(vertex_count: usize, edge_capacity: usize) -> WeightedDiGraph {
        WeightedDiGraph {
            vertex_count,
            edges: Vec::with_capacity(edge_capacity),
            out_degree: vec![0; vertex_count],
            in_degree: vec![0; vertex_count],
        }
    }

    /// Add a directed weighted edge, returns its index.
    /// The weight must be an integral number within the i64 range.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<usize, JsError> {
        weight_from_f64(from, to, weight)
            .and_then(|weight| self.push_edge(Edge::new(from, to, weight)))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Number of vertices.
    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges, parallel edges counted separately.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Out-degree of a vertex.
    #[wasm_bindgen(js_name = outDegree)]
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.out_degree.get(vertex).copied().unwrap_or(0)
    }

    /// In-degree of a vertex.
    #[wasm_bindgen(js_name = inDegree)]
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_degree.get(vertex).copied().unwrap_or(0)
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        let snapshot = GraphSnapshot {
            vertex_count: self.vertex_count,
            edges: self.edges.clone(),
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Import graph from JSON snapshot. Out-of-range edges are rejected.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WeightedDiGraph, JsError> {
        WeightedDiGraph::from_snapshot_json(json).map_err(|e| JsError::new(&e))
    }

    /// Shortest distances from `source`.
    /// Returns JSON: { distances: (number|null)[], has_negative_cycle: bool, rounds: number }
    #[wasm_bindgen(js_name = shortestPaths)]
    pub fn shortest_paths(&self, source: usize) -> Result<JsValue, JsError> {
        let result = self.run(source).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL))
    }

    /// Shortest distances with an explicit config object, e.g. `{ early_termination: true }`.
    #[wasm_bindgen(js_name = shortestPathsWith)]
    pub fn shortest_paths_with(&self, source: usize, config: JsValue) -> Result<JsValue, JsError> {
        let config: BellmanFordConfig = if config.is_undefined() || config.is_null() {
            BellmanFordConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
        };
        let result = self
            .run_with_config(source, &config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL))
    }

    /// Check if a negative cycle is reachable from `source`.
    #[wasm_bindgen(js_name = hasNegativeCycle)]
    pub fn has_negative_cycle(&self, source: usize) -> Result<bool, JsError> {
        self.run(source)
            .map(|r| r.has_negative_cycle)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Human-readable distance report from `source`.
    pub fn report(&self, source: usize) -> Result<String, JsError> {
        let result = self.run(source).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(report::render(source, &result))
    }
}

#[cfg(feature = "reachability")]
#[wasm_bindgen]
impl WeightedDiGraph {
    /// Get all vertex indices reachable from a source vertex.
    #[wasm_bindgen(js_name = reachableFrom)]
    pub fn reachable_from(&self, source: usize) -> JsValue {
        use crate::algorithms::reachability::reachable_from;
        let vertices = reachable_from(self, source);
        serde_wasm_bindgen::to_value(&vertices).unwrap_or(JsValue::NULL)
    }
}

/// Convert a JS number to an edge weight without wrapping or truncating.
fn weight_from_f64(from: usize, to: usize, weight: f64) -> Result<i64, ShortestPathError> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if weight.is_finite()
        && weight.fract() == 0.0
        && weight >= i64::MIN as f64
        && weight < i64::MAX as f64
    {
        Ok(weight as i64)
    } else {
        Err(ShortestPathError::InvalidWeight { from, to })
    }
}

// Rust-side API (not exposed to WASM)
impl WeightedDiGraph {
    /// Append an edge after checking both endpoints; returns its index.
    pub fn push_edge(&mut self, edge: Edge) -> Result<usize, ShortestPathError> {
        if edge.from >= self.vertex_count || edge.to >= self.vertex_count {
            return Err(ShortestPathError::EdgeOutOfRange {
                index: self.edges.len(),
                from: edge.from,
                to: edge.to,
                vertex_count: self.vertex_count,
            });
        }

        self.out_degree[edge.from] += 1;
        self.in_degree[edge.to] += 1;
        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    /// Build a graph from an edge list, rejecting out-of-range endpoints.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Result<Self, ShortestPathError> {
        let mut graph = WeightedDiGraph::with_capacity(vertex_count, edges.len());
        for &edge in edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Run the relaxation engine from `source` with the default config.
    pub fn run(&self, source: usize) -> Result<ShortestPaths, ShortestPathError> {
        bellman_ford::shortest_paths(self.vertex_count, &self.edges, source)
    }

    pub fn run_with_config(
        &self,
        source: usize,
        config: &BellmanFordConfig,
    ) -> Result<ShortestPaths, ShortestPathError> {
        bellman_ford::shortest_paths_with_config(self.vertex_count, &self.edges, source, config)
    }

    /// Parse a snapshot; errors are rendered as strings for the JS boundary.
    fn from_snapshot_json(json: &str) -> Result<Self, String> {
        let snapshot: GraphSnapshot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        WeightedDiGraph::from_edges(snapshot.vertex_count, &snapshot.edges).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_graph() {
        let g = WeightedDiGraph::new(3);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut g = WeightedDiGraph::new(2);
        g.push_edge(Edge::new(0, 1, 4)).unwrap();
        g.push_edge(Edge::new(0, 1, -1)).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.in_degree(1), 2);
    }

    #[test]
    fn test_degrees() {
        let g = WeightedDiGraph::from_edges(
            3,
            &[Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(1, 2, 1), Edge::new(2, 2, 0)],
        )
        .unwrap();

        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(1), 1);
        assert_eq!(g.out_degree(2), 1);

        assert_eq!(g.in_degree(0), 0);
        assert_eq!(g.in_degree(1), 1);
        assert_eq!(g.in_degree(2), 3);

        assert_eq!(g.out_degree(9), 0);
    }

    #[test]
    fn test_push_edge_out_of_range() {
        let mut g = WeightedDiGraph::new(2);
        g.push_edge(Edge::new(0, 1, 1)).unwrap();
        let err = g.push_edge(Edge::new(1, 2, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err,
            ShortestPathError::EdgeOutOfRange {
                index: 1,
                from: 1,
                to: 2,
                vertex_count: 2
            }
        );
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_weight_from_f64() {
        assert_eq!(weight_from_f64(0, 1, 3e9), Ok(3_000_000_000));
        assert_eq!(weight_from_f64(0, 1, -7.0), Ok(-7));
        assert_eq!(weight_from_f64(0, 1, i64::MIN as f64), Ok(i64::MIN));

        for bad in [0.5, f64::NAN, f64::INFINITY, 1e19, -1e19, i64::MAX as f64] {
            let err = weight_from_f64(0, 1, bad).unwrap_err();
            assert_eq!(err, ShortestPathError::InvalidWeight { from: 0, to: 1 });
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let g = WeightedDiGraph::from_edges(3, &[Edge::new(0, 1, -2), Edge::new(1, 2, 5)]).unwrap();

        let json = g.to_json();
        let g2 = WeightedDiGraph::from_snapshot_json(&json).unwrap();

        assert_eq!(g2.vertex_count(), 3);
        assert_eq!(g2.edges(), g.edges());
    }

    #[test]
    fn test_json_rejects_bad_edge() {
        let json = r#"{"vertex_count":2,"edges":[{"from":0,"to":3,"weight":1}]}"#;
        assert!(WeightedDiGraph::from_snapshot_json(json).is_err());
        assert!(WeightedDiGraph::from_snapshot_json("not json").is_err());
    }

    #[test]
    fn test_run_from_graph() {
        let g = WeightedDiGraph::from_edges(
            3,
            &[Edge::new(0, 1, -1), Edge::new(1, 2, -2), Edge::new(2, 0, -3)],
        )
        .unwrap();
        assert!(g.run(0).unwrap().has_negative_cycle);

        let config = BellmanFordConfig {
            early_termination: true,
        };
        assert!(g.run_with_config(1, &config).unwrap().has_negative_cycle);
        assert!(g.run(3).is_err());
    }
}
