//! Print the catalog listing.

use anyhow::Result;

use super::{load_catalog, CatalogArgs};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(ctx, &args.listing())?;
    let report = catalog.report();

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.report(&report);
    }

    Ok(())
}
