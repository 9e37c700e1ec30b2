//! skill-stats - print Axes ability statistics for a skill level

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skillrules::{AxesStats, Locale, SkillsConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "skill-stats", about = "Show Axes ability statistics for a skill level")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON locale bundle overriding the built-in English strings
    #[arg(long)]
    locale: Option<PathBuf>,

    /// Axes skill level
    #[arg(long)]
    level: u32,

    /// Include odds for players with the lucky perk
    #[arg(long)]
    lucky: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillrules=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = SkillsConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let locale = match cli.locale.as_deref() {
        Some(path) => Locale::with_overrides(path).context("loading locale")?,
        None => Locale::english(),
    };
    info!("Computing Axes stats for level {}", cli.level);

    let stats = AxesStats::at_level(&config, cli.level, cli.lucky);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in stats.lines(&locale) {
            println!("{}", line);
        }
    }

    Ok(())
}
