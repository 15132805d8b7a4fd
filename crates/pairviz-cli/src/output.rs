//! Terminal output formatting.

use colored::Colorize;
use pairviz_core::{ExportSummary, GraphStats};

/// Print the result of a DOT export and the command that renders it.
pub fn print_export_summary(summary: &ExportSummary, follow_up: &str) {
    println!("{}", "Graph exported:".green().bold());
    println!("  File:   {}", summary.output.display().to_string().cyan());
    println!("  Tokens: {}", summary.tokens);
    println!("  Pairs:  {}", summary.pairs);
    println!("  Nodes:  {}", summary.nodes.to_string().cyan());
    println!("  Edges:  {}", summary.edges.to_string().cyan());

    println!("\n{}", "Render the image with:".bold());
    println!("  {}", follow_up.dimmed());
}

/// Print graph counts.
pub fn print_stats(stats: &GraphStats) {
    println!("{}", "Token Graph".bold());
    println!("{}", "─".repeat(40));
    println!("  Tokens:          {}", stats.tokens);
    println!("  Pairs:           {}", stats.pairs);
    println!("  Nodes:           {}", stats.nodes.to_string().cyan());
    println!("  Edges:           {}", stats.edges.to_string().cyan());

    let loops = stats.self_loops.to_string();
    println!(
        "  Self-loops:      {}",
        if stats.self_loops > 0 { loops.yellow() } else { loops.normal() }
    );
    let duplicates = stats.duplicate_edges.to_string();
    println!(
        "  Parallel edges:  {}",
        if stats.duplicate_edges > 0 { duplicates.yellow() } else { duplicates.normal() }
    );
    println!("{}", "─".repeat(40));
}
