//! Reachability queries over the weighted edge list.
//!
//! Weights are ignored here: a vertex is reachable if some directed path
//! leads to it from the source. After a shortest-path run without a
//! negative cycle, exactly these vertices carry a finite distance.

use crate::graph::{Edge, WeightedDiGraph};
use std::collections::VecDeque;

/// Get vertices reachable from a source (outgoing direction).
///
/// Uses BFS; the source comes first and the rest follow in discovery order.
/// An out-of-range source yields an empty vector.
pub fn reachable_from(graph: &WeightedDiGraph, source: usize) -> Vec<usize> {
    let n = graph.vertex_count();
    if source >= n {
        return Vec::new();
    }

    let successors = successor_lists(n, graph.edges());

    let mut visited = vec![false; n];
    let mut result = Vec::new();
    let mut queue = VecDeque::new();

    visited[source] = true;
    result.push(source);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        for &w in &successors[v] {
            if !visited[w] {
                visited[w] = true;
                result.push(w);
                queue.push_back(w);
            }
        }
    }

    result
}

/// Reachability as a per-vertex mask, straight from an edge slice.
///
/// Edges with an endpoint outside `0..vertex_count` are skipped.
pub fn reachable_mask(vertex_count: usize, edges: &[Edge], source: usize) -> Vec<bool> {
    let mut mask = vec![false; vertex_count];
    if source >= vertex_count {
        return mask;
    }

    let successors = successor_lists(vertex_count, edges);
    let mut stack = vec![source];
    mask[source] = true;

    while let Some(v) = stack.pop() {
        for &w in &successors[v] {
            if !mask[w] {
                mask[w] = true;
                stack.push(w);
            }
        }
    }

    mask
}

/// Forward adjacency from the edge list, ignoring weights and invalid edges.
fn successor_lists(n: usize, edges: &[Edge]) -> Vec<Vec<usize>> {
    let mut successors = vec![Vec::new(); n];
    for edge in edges {
        if edge.from < n && edge.to < n {
            successors[edge.from].push(edge.to);
        }
    }
    successors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bellman_ford::shortest_paths;

    fn make_graph(n: usize, edges: &[(usize, usize, i64)]) -> WeightedDiGraph {
        let mut g = WeightedDiGraph::new(n);
        for &(from, to, weight) in edges {
            g.push_edge(Edge::new(from, to, weight)).unwrap();
        }
        g
    }

    #[test]
    fn test_reachable_chain() {
        let g = make_graph(4, &[(0, 1, 1), (1, 2, -1)]);
        assert_eq!(reachable_from(&g, 0), vec![0, 1, 2]);
        assert_eq!(reachable_from(&g, 2), vec![2]);
    }

    #[test]
    fn test_reachable_out_of_range() {
        let g = make_graph(2, &[(0, 1, 1)]);
        assert!(reachable_from(&g, 5).is_empty());
        assert_eq!(reachable_mask(2, g.edges(), 5), vec![false, false]);
    }

    #[test]
    fn test_reachable_cycle() {
        let g = make_graph(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        let mut r = reachable_from(&g, 1);
        r.sort_unstable();
        assert_eq!(r, vec![0, 1, 2]);
    }

    #[test]
    fn test_mask_matches_finite_distances() {
        let g = make_graph(
            6,
            &[(0, 1, 3), (1, 2, -2), (3, 4, 1), (4, 5, -7), (2, 0, 5)],
        );
        for source in 0..6 {
            let result = shortest_paths(g.vertex_count(), g.edges(), source).unwrap();
            assert!(!result.has_negative_cycle);
            let mask = reachable_mask(g.vertex_count(), g.edges(), source);
            let finite: Vec<bool> = result.distances.iter().map(Option::is_some).collect();
            assert_eq!(mask, finite, "source {}", source);
        }
    }
}
