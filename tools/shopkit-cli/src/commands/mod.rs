//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod demo;
pub mod init;

use anyhow::{Context as _, Result};
use clap::Args;
use shopkit_commerce::catalog::{Catalog, SortOption};

use crate::config::ListingConfig;
use crate::context::Context;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Sort order: position, price-asc, price-desc, name-asc, name-desc.
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOption>,

    /// Hide products cheaper than this.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Hide products dearer than this.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Show at most N products per category.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl CatalogArgs {
    /// Listing overrides given on the command line.
    pub fn listing(&self) -> ListingConfig {
        ListingConfig {
            sort: self.sort,
            min_price: self.min_price,
            max_price: self.max_price,
            limit: self.limit,
        }
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// User who owns the cart.
    #[arg(short, long, default_value = "guest")]
    pub user: String,

    /// Product name to add; repeat to add more or to raise a quantity.
    #[arg(short, long = "add", required = true)]
    pub add: Vec<String>,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// User who owns the sample cart.
    #[arg(short, long, default_value = "alice")]
    pub user: String,
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Where to write the config.
    #[arg(default_value = "shopkit.toml")]
    pub path: String,

    /// Overwrite an existing file.
    #[arg(short, long)]
    pub force: bool,
}

fn parse_sort(s: &str) -> Result<SortOption, String> {
    SortOption::from_str(s).ok_or_else(|| {
        format!(
            "unknown sort '{}'; expected position, price-asc, price-desc, name-asc or name-desc",
            s
        )
    })
}

/// Build the configured catalog with the listing from config plus overrides.
pub fn load_catalog(ctx: &Context, overrides: &ListingConfig) -> Result<Catalog> {
    let seed = &ctx.config.seed;
    let mut catalog = seed.build_catalog().context("Failed to build catalog")?;
    let listing = ctx.config.listing.merge(overrides);
    catalog.set_lister(listing.build_lister(seed)?);

    ctx.output.debug(&format!(
        "Loaded {} categories, {} products",
        catalog.categories().len(),
        catalog.product_count()
    ));
    Ok(catalog)
}
