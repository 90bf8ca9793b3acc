//! Write a starter config file.

use anyhow::{bail, Context as _, Result};

use super::InitArgs;
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the init command.
pub fn run(args: InitArgs, ctx: &Context) -> Result<()> {
    let target = ctx.resolve_path(&args.path);

    if target.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            target.display()
        );
    }

    std::fs::write(&target, generate_default_config()?)
        .with_context(|| format!("Failed to write config file: {}", target.display()))?;

    ctx.output.success(&format!("Wrote {}", target.display()));
    ctx.output.info("Edit the categories and products, then run `shopkit catalog`.");
    Ok(())
}
