//! pairviz CLI
//!
//! Exports the token pair graph of an indexer database as Graphviz DOT.

use anyhow::{Context, Result};
use clap::Parser;
use pairviz_core::config::{Config, LoggerConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing from the logger config.
///
/// `RUST_LOG` takes precedence over the configured level and `--verbose`
/// forces `debug`. Logs go to stderr unless a log file is configured, so
/// stdout only carries command output. The returned guard flushes the file
/// writer on drop and must be held until exit.
fn init_tracing(logger: &LoggerConfig, verbose: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&logger.level)
                .with_context(|| format!("Invalid logger level: {}", logger.level))?,
        }
    };

    if let Some(path) = &logger.path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("Invalid log file path: {}", path.display()))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();

        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        Ok(None)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let _guard = init_tracing(&config.logger, cli.verbose)?;

    cli.execute(config)
}
