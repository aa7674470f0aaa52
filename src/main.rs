use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statline::{derive_stats, get_rank, RawProfile, StaticConfig};

#[derive(Parser)]
#[command(name = "statline")]
#[command(about = "Derive display-ready player statistics from raw telemetry")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./statline.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the full stats document from a profile JSON file
    Derive {
        /// Path to the raw profile JSON
        profile: PathBuf,

        /// Only print one dotted section, e.g. "bedwars" or
        /// "modes.classic.arena"
        #[arg(long)]
        section: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve and print a player's display rank
    Rank {
        /// Path to the raw profile JSON
        profile: PathBuf,
    },

    /// Load and validate a static-config JSON file
    CheckConfig {
        /// Path to the config JSON
        tables: PathBuf,
    },
}

/// Binary-level settings, loaded from a small TOML file when present.
#[derive(Debug, Deserialize, Default)]
struct AppConfig {
    /// Log level used when the CLI flag is left at its default
    #[serde(default)]
    log_level: Option<String>,

    /// Static-table JSON overriding the built-in defaults
    #[serde(default)]
    tables: Option<PathBuf>,
}

impl AppConfig {
    fn load(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Ok(AppConfig::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {path}"))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {path}"))
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_static_config(app: &AppConfig) -> Result<StaticConfig> {
    match &app.tables {
        Some(path) => StaticConfig::from_file(path)
            .with_context(|| format!("failed to load tables from {}", path.display())),
        None => Ok(StaticConfig::default()),
    }
}

fn load_profile(path: &PathBuf) -> Result<RawProfile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    RawProfile::from_json(&contents)
        .with_context(|| format!("{} is not a valid player profile", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let app = AppConfig::load(&cli.config)?;

    let level = app.log_level.as_deref().unwrap_or(&cli.log_level);
    init_tracing(level);

    match cli.command {
        Commands::Derive {
            profile,
            section,
            pretty,
        } => {
            let config = load_static_config(&app)?;
            let profile = load_profile(&profile)?;

            info!(uuid = %profile.uuid(), "deriving stats");
            let derived = derive_stats(&profile, &config);

            let output = match &section {
                Some(path) => derived
                    .get(path)
                    .with_context(|| format!("no section at {path}"))?,
                None => &derived.0,
            };

            if pretty {
                println!("{}", serde_json::to_string_pretty(output)?);
            } else {
                println!("{}", serde_json::to_string(output)?);
            }
        }

        Commands::Rank { profile } => {
            let profile = load_profile(&profile)?;
            let rank = get_rank(&profile);
            println!("{}", serde_json::to_string(&rank)?);
        }

        Commands::CheckConfig { tables } => {
            let config = StaticConfig::from_file(&tables)?;
            info!(
                bedwars_prestiges = config.bedwars.prestiges.len(),
                skywars_prestiges = config.skywars.prestiges.len(),
                duels_divisions = config.duels.divisions.len(),
                "config is valid"
            );
            println!("ok");
        }
    }

    Ok(())
}
