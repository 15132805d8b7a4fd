//! Graphviz DOT rendering.
//!
//! Only the graph description is produced here. Layout and image output are
//! left to Graphviz, run by hand on the written file (see
//! [`follow_up_command`]).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::CoreError;
use crate::graph::model::TokenGraph;

/// Graphviz layout engine, written into the file as the `layout` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutEngine {
    /// Scalable force-directed placement.
    #[default]
    Sfdp,
    Fdp,
    Neato,
    Dot,
    Circo,
    Twopi,
}

impl LayoutEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sfdp => "sfdp",
            Self::Fdp => "fdp",
            Self::Neato => "neato",
            Self::Dot => "dot",
            Self::Circo => "circo",
            Self::Twopi => "twopi",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutEngine {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sfdp" => Ok(Self::Sfdp),
            "fdp" => Ok(Self::Fdp),
            "neato" => Ok(Self::Neato),
            "dot" => Ok(Self::Dot),
            "circo" => Ok(Self::Circo),
            "twopi" => Ok(Self::Twopi),
            other => Err(CoreError::InvalidEngine(other.to_string())),
        }
    }
}

/// Graph-level rendering hints.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub engine: LayoutEngine,
    /// Graphviz `overlap` attribute, e.g. `scale` or `false`.
    pub overlap: Option<String>,
}

fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", dot_escape(s))
}

/// Render the graph as an undirected DOT document.
pub fn render_dot(graph: &TokenGraph, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str("graph {\n");
    out.push_str(&format!("  layout={};\n", options.engine));
    if let Some(overlap) = &options.overlap {
        out.push_str(&format!("  overlap={};\n", quoted(overlap)));
    }

    if graph.node_count() > 0 {
        out.push('\n');
    }
    for symbol in graph.nodes() {
        out.push_str(&format!("  {};\n", quoted(symbol)));
    }

    if graph.edge_count() > 0 {
        out.push('\n');
    }
    for (a, b) in graph.edges() {
        out.push_str(&format!("  {} -- {};\n", quoted(a), quoted(b)));
    }

    out.push_str("}\n");
    out
}

/// Quote a word for a POSIX shell, leaving plain words untouched.
fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '=' | ':' | ',' | '+'));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// The Graphviz command that turns the written file into a PNG.
pub fn follow_up_command(output: &Path, options: &RenderOptions) -> String {
    let overlap = options.overlap.as_deref().unwrap_or("scale");
    format!(
        "{} -x {} -Tpng {} > {}",
        options.engine,
        shell_quote(&format!("-Goverlap={overlap}")),
        shell_quote(&output.display().to_string()),
        shell_quote(&output.with_extension("png").display().to_string())
    )
}
