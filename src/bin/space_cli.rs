//! Operator CLI for the space research API.
//!
//! Runs the same services as the HTTP server, without the HTTP layer, so an
//! operator can check upstream reachability and data quality from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Summary statistics over the first 50 planets
//! cargo run --bin space-cli -- summary --limit 50
//!
//! # Today's near-Earth objects (requires NASA_API_KEY)
//! cargo run --bin space-cli -- asteroids
//!
//! # Check the configured planet source
//! cargo run --bin space-cli -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `space_research_api::config`.

use space_research_api::config;
use space_research_api::domain::entities::{NearEarthObject, SummaryStatistics};
use space_research_api::server::build_state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for the space research API.
#[derive(Parser)]
#[command(name = "space-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show summary statistics over the first N planets
    Summary {
        /// Number of planets to summarize
        #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=200))]
        limit: u32,
    },

    /// List today's near-Earth objects
    Asteroids,

    /// Planet source operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Planet source subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check that the configured planet source is usable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = build_state(&config)?;

    match cli.command {
        Commands::Summary { limit } => {
            let summary = state
                .exoplanet_service
                .summary(limit)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to compute summary: {}", e))?;
            print_summary(limit, &summary);
        }
        Commands::Asteroids => {
            let objects = state
                .asteroid_service
                .today()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to fetch NEO feed: {}", e))?;
            print_asteroids(&objects);
        }
        Commands::Store {
            action: StoreAction::Check,
        } => {
            println!("{}", "🗄  Planet Source".bright_blue().bold());
            println!();
            println!(
                "  Source: {}",
                state.exoplanet_service.source_name().cyan()
            );

            match state.exoplanet_service.source_status().await {
                Ok(message) => {
                    println!("  {}", message.bright_black());
                    println!();
                    println!("{}", "✅ Planet source is usable".green().bold());
                }
                Err(e) => {
                    println!();
                    println!("{}", "❌ Planet source unusable".red().bold());
                    anyhow::bail!("{}", e);
                }
            }
        }
    }

    Ok(())
}

/// Prints summary statistics.
///
/// # Output Format
///
/// ```text
/// 📊 Research Summary (first 20 planets)
///
///   Total:            20
///   Average radius:   2.41 R⊕
///   Top method:       Transit
///   Latest year:      2016
///
///   Rocky             7
///   Super Earth       9
/// ```
fn print_summary(limit: u32, summary: &SummaryStatistics) {
    println!(
        "{}",
        format!("📊 Research Summary (first {} planets)", limit)
            .bright_blue()
            .bold()
    );
    println!();
    println!("  {:<18}{}", "Total:", summary.total.to_string().bright_white().bold());

    let radius = summary
        .average_radius
        .map(|r| format!("{:.2} R⊕", r))
        .unwrap_or_else(|| "n/a".to_string());
    println!("  {:<18}{}", "Average radius:", radius.cyan());
    println!("  {:<18}{}", "Top method:", summary.most_common_method.cyan());

    let year = summary
        .latest_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    println!("  {:<18}{}", "Latest year:", year.cyan());
    println!();

    for (category, count) in &summary.categories {
        println!("  {:<18}{}", category.as_str(), count);
    }
    println!();
}

/// Prints near-Earth objects, hazardous ones highlighted.
fn print_asteroids(objects: &[NearEarthObject]) {
    println!("{}", "☄  Near-Earth Objects".bright_blue().bold());
    println!();

    if objects.is_empty() {
        println!("{}", "  No objects in today's feed window".yellow());
        return;
    }

    println!(
        "  {:<12} {:<30} {:>14} {:<10}",
        "Date".bright_white().bold(),
        "Name".bright_white().bold(),
        "Diameter (m)".bright_white().bold(),
        "Hazard".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for neo in objects {
        let diameter = neo
            .diameter_meters
            .map(|d| format!("{:.1}", d))
            .unwrap_or_else(|| "-".to_string());
        let hazard = if neo.hazardous {
            "HAZARDOUS".red()
        } else {
            "-".bright_black()
        };

        println!(
            "  {:<12} {:<30} {:>14} {}",
            neo.close_approach_date.bright_black(),
            neo.name.cyan(),
            diameter,
            hazard
        );
    }

    let hazardous = objects.iter().filter(|n| n.hazardous).count();
    println!();
    println!(
        "  Total: {}  Hazardous: {}",
        objects.len().to_string().bright_white().bold(),
        hazardous.to_string().red().bold()
    );
    println!();
}
