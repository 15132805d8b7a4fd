//! DOT export command.

use anyhow::{Context, Result};
use clap::Args;
use pairviz_core::render::follow_up_command;
use pairviz_core::{LayoutEngine, RenderOptions};
use pairviz_db::Db;
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct RenderArgs {
    /// Output DOT file
    #[arg(short, long, default_value = "assets/graph.dot")]
    pub output: PathBuf,

    /// Graphviz layout engine written into the file
    #[arg(long, default_value = "sfdp")]
    pub engine: LayoutEngine,

    /// Graphviz overlap mode (e.g. scale, false)
    #[arg(long)]
    pub overlap: Option<String>,
}

pub fn execute(args: RenderArgs, db: &Db, json: bool) -> Result<()> {
    let options = RenderOptions {
        engine: args.engine,
        overlap: args.overlap,
    };

    let summary = pairviz_core::export_graph(db, &args.output, &options)
        .with_context(|| format!("Failed to export graph to {}", args.output.display()))?;

    let follow_up = follow_up_command(&summary.output, &options);
    tracing::info!(command = %follow_up, "Render the image with Graphviz");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_export_summary(&summary, &follow_up);
    }

    Ok(())
}
