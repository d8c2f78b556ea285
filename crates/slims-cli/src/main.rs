mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::adjust::Adjustment;
use config::Config;

/// Used when `RUST_LOG` is unset or empty
const DEFAULT_FILTER: &str = "slims=info,slims_core=warn";

fn main() -> Result<()> {
    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = load_config(&args);
    let game = args.game.or(config.game);

    match args.command {
        Command::Info { file } => commands::info::run(&file, game),
        Command::List {
            file,
            group,
            format,
        } => commands::list::run(&file, game, group, format),
        Command::Get { file, field } => commands::get::run(&file, game, &field),
        Command::Set { file, field, value } => commands::set::run(&file, game, &field, &value),
        Command::Toggle { file, field } => commands::toggle::run(&file, game, &field),
        Command::Adjust {
            file,
            field,
            up,
            down,
            min,
            max,
            step,
        } => {
            let adjustment = Adjustment {
                up,
                down,
                to_min: min,
                to_max: max,
                step,
            };
            commands::adjust::run(&file, game, &field, adjustment, &config)
        }
        Command::FixChecksum { file } => commands::fix_checksum::run(&file, game),
        Command::Scan { dir } => commands::scan::run(&dir),
        Command::Hexdump {
            file,
            offset,
            length,
            ascii,
        } => commands::hexdump::run(&file, &offset, length, ascii),
    }
}

/// Build the log filter, keeping the user's directives as given
fn env_filter(directives: Option<&str>) -> EnvFilter {
    match directives.map(str::trim) {
        Some(d) if !d.is_empty() => EnvFilter::new(d),
        _ => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Load the config file, falling back to defaults when it is missing or invalid
fn load_config(args: &Cli) -> Config {
    let Some(path) = args.config.clone().or_else(Config::default_path) else {
        debug!("No config directory, using defaults");
        return Config::default();
    };

    if args.config.is_none() && !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    match Config::load(&path) {
        Ok(c) => {
            info!("Loaded config from {}", path.display());
            c
        }
        Err(e) => {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        }
    }
}
