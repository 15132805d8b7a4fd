//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pairviz_core::Config;
use pairviz_db::Db;
use std::path::PathBuf;

pub mod render;
pub mod stats;

/// Token pair graph exporter for SQLite indexer databases
#[derive(Parser)]
#[command(name = "pairviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (`database.url` must be an SQLite URL or path)
    #[arg(short, long, global = true, default_value = "config.dev.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the token graph as a DOT file
    Render(render::RenderArgs),

    /// Show graph size without writing anything
    Stats,
}

impl Cli {
    pub fn execute(self, config: Config) -> Result<()> {
        let db = Db::open(&config.database.url).context("Failed to connect to database")?;

        match self.command {
            Commands::Render(args) => render::execute(args, &db, self.json),
            Commands::Stats => stats::execute(&db, self.json),
        }
    }
}
