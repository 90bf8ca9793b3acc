//! Fill a user's cart by product name and print it.

use anyhow::{Context as _, Result};
use shopkit_commerce::cart::{CartReport, Carts};
use shopkit_commerce::catalog::Catalog;
use shopkit_commerce::{CommerceError, UserId};

use super::{load_catalog, CartArgs};
use crate::config::ListingConfig;
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(ctx, &ListingConfig::default())?;
    let mut carts = Carts::new(ctx.config.seed.currency);
    let user = UserId::new(args.user);

    let report = fill_cart(&catalog, &mut carts, &user, &args.add)?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.report(&report);
    }

    Ok(())
}

/// Add each named product to the user's cart and price the result.
///
/// Names resolve to the first matching product in catalog order.
pub fn fill_cart(
    catalog: &Catalog,
    carts: &mut Carts,
    user: &UserId,
    names: &[String],
) -> Result<CartReport> {
    let cart = carts.cart_for(user);

    for name in names {
        let product = catalog
            .find_product_by_name(name)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(name.clone()))?;
        cart.add_product(product)
            .with_context(|| format!("Failed to add {} to cart", name))?;
    }

    cart.report().context("Failed to price cart")
}
