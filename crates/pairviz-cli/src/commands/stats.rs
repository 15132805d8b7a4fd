//! Graph size command.

use anyhow::{Context, Result};
use pairviz_db::Db;

use crate::output;

pub fn execute(db: &Db, json: bool) -> Result<()> {
    let stats = pairviz_core::graph_stats(db).context("Failed to build graph")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        output::print_stats(&stats);
    }

    Ok(())
}
