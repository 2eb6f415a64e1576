//! packer packs - list the catalog

use anyhow::Result;

use packer_core::catalog::PackageCatalog;
use packer_core::models::Response;

use super::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    let packages = ctx.catalog.get_all()?;

    if ctx.json {
        println!("{}", serde_json::to_string(&Response::ok(&packages))?);
        return Ok(());
    }

    println!("{:<12}  {:>10}", "ID", "QUANTITY");
    for package in &packages {
        println!("{:<12}  {:>10}", package.id, package.quantity);
    }
    Ok(())
}
