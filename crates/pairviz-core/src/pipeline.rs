//! Fetch, build and export in one pass.

use std::path::{Path, PathBuf};

use pairviz_db::queries::{pairs, tokens};
use pairviz_db::{Db, PairRow, TokenMap};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::CoreResult;
use crate::export::write_atomic;
use crate::graph::{build_graph, model::TokenGraph};
use crate::render::{render_dot, RenderOptions};

/// Everything read from the database for one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub pairs: Vec<PairRow>,
    pub tokens: TokenMap,
}

/// Result of a graph export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub tokens: usize,
    pub pairs: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Counts for a graph that is built but not written.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub tokens: usize,
    pub pairs: usize,
    pub nodes: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub duplicate_edges: usize,
}

/// Read pairs and tokens.
pub fn fetch(db: &Db) -> CoreResult<Dataset> {
    let pairs = pairs::list_pairs(db)?;
    let tokens = tokens::symbol_map(db)?;

    Ok(Dataset { pairs, tokens })
}

fn load_graph(db: &Db) -> CoreResult<(Dataset, TokenGraph)> {
    let data = fetch(db)?;
    info!(pairs = data.pairs.len(), tokens = data.tokens.len(), "Loaded data");

    let graph = build_graph(&data.pairs, &data.tokens)?;

    let duplicates = graph.duplicate_edge_count();
    if duplicates > 0 {
        warn!(duplicates, "Graph contains parallel edges");
    }
    let loops = graph.self_loop_count();
    if loops > 0 {
        warn!(loops, "Graph contains self-loops");
    }

    Ok((data, graph))
}

/// Build the token graph and write it as DOT to `output`.
///
/// Nothing is written if any step before rendering fails.
pub fn export_graph(db: &Db, output: &Path, options: &RenderOptions) -> CoreResult<ExportSummary> {
    let (data, graph) = load_graph(db)?;

    let dot = render_dot(&graph, options);
    write_atomic(output, &dot)?;

    info!(
        path = %output.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        engine = %options.engine,
        "Graph exported"
    );

    Ok(ExportSummary {
        output: output.to_path_buf(),
        tokens: data.tokens.len(),
        pairs: data.pairs.len(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}

/// Build the token graph and report its size without writing anything.
pub fn graph_stats(db: &Db) -> CoreResult<GraphStats> {
    let (data, graph) = load_graph(db)?;

    Ok(GraphStats {
        tokens: data.tokens.len(),
        pairs: data.pairs.len(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        self_loops: graph.self_loop_count(),
        duplicate_edges: graph.duplicate_edge_count(),
    })
}
