//! Shopping cart module.
//!
//! Contains the cart, the per-user cart registry, and cart pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry, Carts};
pub use pricing::{CartLine, CartPricing, CartReport, CartReportLine};
