//! Token graph model.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Undirected graph of token symbols.
///
/// Nodes are unique per symbol. Edges are kept exactly as added, so parallel
/// edges and self-loops survive into the rendered output.
#[derive(Debug, Clone, Default)]
pub struct TokenGraph {
    graph: UnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl TokenGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for `symbol`, or return the existing one.
    pub fn add_node(&mut self, symbol: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(symbol) {
            return idx;
        }

        let idx = self.graph.add_node(symbol.to_string());
        self.index.insert(symbol.to_string(), idx);
        idx
    }

    /// Add an edge between two nodes. Never deduplicated.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> EdgeIndex {
        self.graph.add_edge(a, b, ())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Node symbols in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(move |idx| self.graph[idx].as_str())
    }

    /// Edge endpoints in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
            )
        })
    }

    /// Number of edges that connect a node to itself.
    pub fn self_loop_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| edge.source() == edge.target())
            .count()
    }

    /// Number of edges that repeat an earlier edge between the same two nodes.
    pub fn duplicate_edge_count(&self) -> usize {
        let mut seen = HashSet::new();
        self.graph
            .edge_references()
            .filter(|edge| {
                let (a, b) = (edge.source(), edge.target());
                let key = if a <= b { (a, b) } else { (b, a) };
                !seen.insert(key)
            })
            .count()
    }
}
