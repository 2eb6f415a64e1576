//! packer - calculate which packs to ship for an order quantity.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use packer_core::catalog::{seed_packages, InMemoryCatalog};
use packer_core::config::{CliOverrides, PackerConfig};
use packer_core::constants::PROJECT_CONFIG_FILE;
use packer_core::models::Response;

mod commands;

use commands::{AppContext, Commands};

/// Packer - pack fulfillment calculator
#[derive(Parser, Debug)]
#[command(name = "packer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project config file (default: ./packer.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the JSON response envelope instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Headroom multiplier for the large-quantity clamp (overrides PACKER_CALCULATOR_HEADROOM_MULTIPLIER)
    #[arg(long, global = true)]
    headroom_multiplier: Option<i64>,

    /// Log filter directives, e.g. "packer=debug" (overrides PACKER_LOG_LEVEL; PACKER_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                tracing::error!(error = %e, "command failed");
                println!("{}", render_failure(&e, true));
            } else {
                eprintln!("{}", render_failure(&e, false));
            }
            ExitCode::FAILURE
        }
    }
}

/// Failure output: the error envelope in JSON mode, otherwise one `Error:` line.
fn render_failure(err: &anyhow::Error, json: bool) -> String {
    if json {
        let resp: Response<()> = Response::error(err.to_string());
        serde_json::to_string(&resp).unwrap_or_default()
    } else {
        format!("Error: {err:#}")
    }
}

fn run(cli: &Cli) -> Result<()> {
    let overrides = CliOverrides {
        headroom_multiplier: cli.headroom_multiplier,
        log_level: cli.log_level.clone(),
    };
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    let config = PackerConfig::load_with_project_file(&config_path, Some(&overrides))?;
    packer_core::tracing::init_tracing_with_default(config.logging.effective_level());

    let catalog = InMemoryCatalog::new();
    let seeded = seed_packages(&catalog, &config.catalog.effective_packages())?;
    tracing::debug!(seeded, config = %config_path.display(), "catalog ready");

    let ctx = AppContext {
        config,
        catalog,
        json: cli.json,
    };
    commands::run(&ctx, &cli.command)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_help_names_the_env_filter_that_wins() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "log_level")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("PACKER_LOG still wins"));
    }

    #[test]
    fn plain_failure_is_a_single_error_line() {
        let err = anyhow::anyhow!("no pack sizes available for quantity 10");
        let out = render_failure(&err, false);
        assert_eq!(out, "Error: no pack sizes available for quantity 10");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn json_failure_is_the_error_envelope() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(render_failure(&err, true), r#"{"ok":false,"message":"boom"}"#);
    }
}
