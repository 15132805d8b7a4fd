//! Graph construction from pair rows.

pub mod model;

use pairviz_db::{PairRow, TokenMap};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use model::TokenGraph;

/// Build the token graph: one node per symbol, one edge per pair.
///
/// Fails on the first pair that references a token id missing from `tokens`.
pub fn build_graph(pairs: &[PairRow], tokens: &TokenMap) -> CoreResult<TokenGraph> {
    let mut graph = TokenGraph::new();

    for pair in pairs {
        let symbol0 = lookup(tokens, pair.token0)?;
        let symbol1 = lookup(tokens, pair.token1)?;

        let a = graph.add_node(symbol0);
        let b = graph.add_node(symbol1);
        graph.add_edge(a, b);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built token graph"
    );
    Ok(graph)
}

fn lookup(tokens: &TokenMap, id: i64) -> CoreResult<&str> {
    tokens
        .get(&id)
        .map(String::as_str)
        .ok_or(CoreError::UnknownToken { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(entries: &[(i64, &str)]) -> TokenMap {
        entries.iter().map(|&(id, s)| (id, s.to_string())).collect()
    }

    fn pairs(entries: &[(i64, i64)]) -> Vec<PairRow> {
        entries
            .iter()
            .map(|&(token0, token1)| PairRow { token0, token1 })
            .collect()
    }

    #[test]
    fn test_chain() {
        let graph = build_graph(
            &pairs(&[(1, 2), (2, 3)]),
            &tokens(&[(1, "A"), (2, "B"), (3, "C")]),
        )
        .unwrap();

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn test_self_loop() {
        let graph = build_graph(&pairs(&[(1, 1)]), &tokens(&[(1, "A")])).unwrap();

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("A", "A")]);
    }

    #[test]
    fn test_empty_pairs() {
        let graph = build_graph(&[], &tokens(&[(1, "A"), (2, "B")])).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unused_tokens_are_not_nodes() {
        let graph = build_graph(
            &pairs(&[(1, 2)]),
            &tokens(&[(1, "A"), (2, "B"), (3, "C")]),
        )
        .unwrap();
        assert!(!graph.contains_node("C"));
    }

    #[test]
    fn test_duplicate_pairs_keep_edges() {
        let graph = build_graph(
            &pairs(&[(1, 2), (1, 2), (2, 1)]),
            &tokens(&[(1, "A"), (2, "B")]),
        )
        .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_shared_symbol_is_one_node() {
        // Two ids carrying the same symbol collapse into one node.
        let graph = build_graph(
            &pairs(&[(1, 3), (2, 3)]),
            &tokens(&[(1, "USDC"), (2, "USDC"), (3, "WETH")]),
        )
        .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_unknown_token() {
        let err = build_graph(&pairs(&[(1, 2), (2, 9)]), &tokens(&[(1, "A"), (2, "B")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownToken { id: 9 }));
    }
}
