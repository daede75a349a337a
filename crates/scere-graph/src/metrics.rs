//! Metrics of the thresholded network: node/edge counts and the
//! degree distribution of the undirected simple graph.

use scere_common::DistanceEdge;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubgraphMetrics {
    /// Number of connected nodes (nodes touched by a kept edge).
    pub node_count: usize,
    /// Number of edges in the simple graph.
    pub edge_count: usize,
    /// Degree of each connected node, sorted descending.
    pub degrees: Vec<usize>,
}

/// Keep edges with distance strictly below the threshold, collapse
/// them into an undirected simple graph (duplicate pairs merge,
/// self-loops are ignored) and report its metrics.
pub fn threshold_subgraph(edges: &[DistanceEdge], threshold: f64) -> SubgraphMetrics {
    let mut pairs: HashSet<(&str, &str)> = HashSet::new();
    for edge in edges {
        if edge.distance >= threshold || edge.a == edge.b {
            continue;
        }
        let pair = if edge.a.as_str() <= edge.b.as_str() {
            (edge.a.as_str(), edge.b.as_str())
        } else {
            (edge.b.as_str(), edge.a.as_str())
        };
        pairs.insert(pair);
    }

    let mut degree_of: HashMap<&str, usize> = HashMap::new();
    for (a, b) in &pairs {
        *degree_of.entry(a).or_default() += 1;
        *degree_of.entry(b).or_default() += 1;
    }

    let mut degrees: Vec<usize> = degree_of.values().copied().collect();
    degrees.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));

    SubgraphMetrics {
        node_count: degree_of.len(),
        edge_count: pairs.len(),
        degrees,
    }
}
