//! Subcommand definitions and dispatch.

use clap::Subcommand;

use packer_core::catalog::InMemoryCatalog;
use packer_core::config::PackerConfig;

pub mod calculate;
pub mod packs;

/// Resolved configuration and seeded catalog shared by every subcommand.
pub struct AppContext {
    pub config: PackerConfig,
    pub catalog: InMemoryCatalog,
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the packs needed to ship a quantity
    Calculate(calculate::CalculateArgs),
    /// List the packages in the catalog
    Packs,
}

pub fn run(ctx: &AppContext, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Calculate(args) => calculate::run(ctx, args),
        Commands::Packs => packs::run(ctx),
    }
}
