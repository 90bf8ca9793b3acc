//! Shopping cart and the per-user cart registry.

use std::io;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::cart::{CartLine, CartPricing, CartReport};
use crate::catalog::ProductRef;
use crate::error::CommerceError;
use crate::ids::{CartId, ProductId, UserId};
use crate::money::{Currency, Money};

/// A product and how many of it the cart holds. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: ProductRef,
    pub quantity: u32,
}

/// A user's shopping cart.
///
/// Entries are keyed by product id, so two products with the same name and
/// price stay separate lines. Iteration follows first-add order. The cart is
/// append-only: there is no removal or decrement.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: CartId,
    user_id: UserId,
    currency: Currency,
    entries: IndexMap<ProductId, CartEntry>,
}

impl Cart {
    /// Create an empty cart for a user.
    pub fn new(user_id: UserId, currency: Currency) -> Self {
        Self {
            id: CartId::generate(),
            user_id,
            currency,
            entries: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &CartId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry or inserts a new one with quantity 1.
    /// Returns the entry's new quantity.
    pub fn add_product(&mut self, product: ProductRef) -> Result<u32, CommerceError> {
        if product.price().currency != self.currency {
            warn!(cart_id = %self.id, product = product.name(), "currency mismatch");
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price().currency.code().to_string(),
            });
        }

        let quantity = match self.entries.entry(product.id().clone()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.quantity = entry.quantity.checked_add(1).ok_or(CommerceError::Overflow)?;
                entry.quantity
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CartEntry {
                    product: product.clone(),
                    quantity: 1,
                });
                1
            }
        };

        debug!(cart_id = %self.id, product = product.name(), quantity, "product added to cart");
        Ok(quantity)
    }

    /// Quantity held for a product, or 0 if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.entries.get(product_id).map_or(0, |e| e.quantity)
    }

    /// Entries in first-add order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Price every entry: `line_total = price * quantity`.
    pub fn lines(&self) -> Result<Vec<CartLine>, CommerceError> {
        self.entries
            .values()
            .map(|entry| {
                let line_total = entry
                    .product
                    .price()
                    .try_multiply(i64::from(entry.quantity))
                    .ok_or(CommerceError::Overflow)?;
                Ok(CartLine {
                    product: entry.product.clone(),
                    quantity: entry.quantity,
                    line_total,
                })
            })
            .collect()
    }

    /// Sum of line totals. Zero for an empty cart.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.calculate_pricing().map(|pricing| pricing.total)
    }

    /// Price every line and sum them.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let lines = self.lines()?;
        let total = Money::try_sum(lines.iter().map(|l| &l.line_total), self.currency)
            .ok_or(CommerceError::Overflow)?;
        Ok(CartPricing { lines, total })
    }

    /// Build the printable report.
    pub fn report(&self) -> Result<CartReport, CommerceError> {
        self.calculate_pricing().map(|pricing| pricing.report())
    }

    /// Write the cart report.
    pub fn print_cart(&self, out: &mut impl io::Write) -> Result<(), CommerceError> {
        let report = self.report()?;
        write!(out, "{}", report)?;
        Ok(())
    }
}

/// Carts keyed by user, created on first use.
#[derive(Debug, Clone, Default)]
pub struct Carts {
    currency: Currency,
    carts: IndexMap<UserId, Cart>,
}

impl Carts {
    /// Create an empty registry whose carts use this currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            carts: IndexMap::new(),
        }
    }

    /// The user's cart, created empty if this is their first.
    pub fn cart_for(&mut self, user_id: &UserId) -> &mut Cart {
        let currency = self.currency;
        self.carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::new(user_id.clone(), currency))
    }

    pub fn get(&self, user_id: &UserId) -> Option<&Cart> {
        self.carts.get(user_id)
    }

    /// Carts in order of first use.
    pub fn iter(&self) -> impl Iterator<Item = &Cart> {
        self.carts.values()
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
