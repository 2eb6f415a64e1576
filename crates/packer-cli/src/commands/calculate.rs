//! packer calculate - packs needed for a quantity

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use packer_core::models::Response;
use packer_core::types::{PackSize, Quantity, RequiredPacks};
use packer_graph::GraphPackCalculator;

use super::AppContext;

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Quantity to ship
    #[arg(allow_negative_numbers = true)]
    pub quantity: Quantity,

    /// Pack size to use instead of the catalog (repeatable)
    #[arg(long = "pack-size", short = 'p')]
    pub pack_sizes: Vec<PackSize>,
}

pub fn run(ctx: &AppContext, args: &CalculateArgs) -> Result<()> {
    let calculator = if args.pack_sizes.is_empty() {
        GraphPackCalculator::from_catalog(&ctx.catalog, &ctx.config.calculator)?
    } else {
        GraphPackCalculator::with_config(args.pack_sizes.iter().copied(), &ctx.config.calculator)
    };

    let packs = calculator.calculate(args.quantity)?;

    if ctx.json {
        println!("{}", serde_json::to_string(&Response::ok(&packs))?);
    } else {
        print!("{}", render_table(&packs));
    }
    Ok(())
}

/// Size/count table, largest pack first, followed by totals.
fn render_table(packs: &RequiredPacks) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>10}  {:>10}", "PACK SIZE", "COUNT");
    for (size, count) in packs.iter().collect::<Vec<_>>().into_iter().rev() {
        let _ = writeln!(out, "{size:>10}  {count:>10}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total packs:      {}", packs.total_packs());
    let _ = writeln!(out, "Shipped quantity: {}", packs.shipped_quantity());
    out
}
