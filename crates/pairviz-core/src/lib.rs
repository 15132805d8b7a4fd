//! pairviz core library
//!
//! Turns the `tokens`/`pairs` tables into an undirected token graph and
//! renders it as Graphviz DOT for an external layout engine.

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod pipeline;
pub mod render;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use graph::{build_graph, model::TokenGraph};
pub use pipeline::{export_graph, fetch, graph_stats, Dataset, ExportSummary, GraphStats};
pub use render::{render_dot, LayoutEngine, RenderOptions};
