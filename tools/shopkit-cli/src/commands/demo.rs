//! Print the catalog, then a sample cart built from it.

use anyhow::{Context as _, Result};
use serde_json::json;
use shopkit_commerce::cart::{CartReport, Carts};
use shopkit_commerce::catalog::{Catalog, ProductRef};
use shopkit_commerce::UserId;

use super::{load_catalog, DemoArgs};
use crate::config::ListingConfig;
use crate::context::Context;

/// Run the demo command.
pub fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(ctx, &ListingConfig::default())?;
    let catalog_report = catalog.report();

    let user = UserId::new(args.user);
    let mut carts = Carts::new(ctx.config.seed.currency);
    let cart_report = fill_sample_cart(&catalog, &mut carts, &user)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "catalog": catalog_report,
            "cart": { "user": user, "report": cart_report },
        }));
        return Ok(());
    }

    ctx.output.header("Catalog");
    ctx.output.report(&catalog_report);
    ctx.output.header(&format!("Cart for {}", user));
    ctx.output.report(&cart_report);
    Ok(())
}

/// Add the first listed product twice and the last listed product once.
///
/// Works on the listed handles, so products that share a name stay distinct.
pub fn fill_sample_cart(catalog: &Catalog, carts: &mut Carts, user: &UserId) -> Result<CartReport> {
    let listed: Vec<ProductRef> = catalog
        .categories()
        .iter()
        .flat_map(|category| catalog.products_by_category(category))
        .collect();

    let cart = carts.cart_for(user);
    if let (Some(first), Some(last)) = (listed.first(), listed.last()) {
        for product in [first, first, last] {
            cart.add_product(ProductRef::clone(product))
                .with_context(|| format!("Failed to add {} to cart", product.name()))?;
        }
    }

    cart.report().context("Failed to price cart")
}
