use anyhow::Result;
use clap::Parser;
use std::path::Path;

use pyan_maint::cli::{Cli, Command};
use pyan_maint::commands;
use pyan_maint::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    let root = cli.directory.as_path();

    // Dispatch to operation
    match cli.command {
        Command::Clean(args) => {
            let config = load_config(cli.config.as_deref(), root)?;
            tracing::info!(?args, "Starting clean");
            commands::clean::run(root, &config, args)?;
        }
        Command::LinesCount => {
            let config = load_config(cli.config.as_deref(), root)?;
            tracing::info!("Counting lines");
            commands::lines::run(root, &config)?;
        }
        Command::CheckCode => {
            let config = load_config(cli.config.as_deref(), root)?;
            tracing::info!("Checking code style");
            let code = commands::check::run(root, &config)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Command::Completions(args) => commands::completions::run(args),
    }

    Ok(())
}

fn load_config(path: Option<&Path>, root: &Path) -> Result<Config> {
    let config = Config::load(path)?;
    tracing::debug!(?config, root = %root.display(), "Loaded configuration");
    Ok(config)
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pyan_maint={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
