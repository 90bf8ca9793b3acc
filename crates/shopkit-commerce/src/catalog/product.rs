//! Product type.

use std::rc::Rc;

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::Serialize;

/// Shared read-only handle to a product.
///
/// Categories and carts both hold products without either owning them.
pub type ProductRef = Rc<Product>;

/// A sellable item in the catalog.
///
/// Immutable once built: fields are private and only exposed through getters.
/// Not `Clone`; share an instance through [`ProductRef`] so that every holder
/// sees the same product.
///
/// ```compile_fail
/// use shopkit_commerce::catalog::Product;
/// use shopkit_commerce::{CategoryId, Currency, Money};
///
/// let mug = Product::new("Mug", Money::new(500, Currency::USD), CategoryId::new("cat-1")).unwrap();
/// let _second = mug.clone();
/// ```
#[derive(Debug, Serialize, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    /// Category this product was created for. Lookup only, never ownership.
    category: CategoryId,
}

impl Product {
    /// Create a product with a freshly generated id.
    ///
    /// Returns an error if the price is negative.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        category: CategoryId,
    ) -> Result<Self, CommerceError> {
        Self::with_id(ProductId::generate(), name, price, category)
    }

    /// Create a product with a caller-supplied id.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: CategoryId,
    ) -> Result<Self, CommerceError> {
        let name = name.into();
        if price.is_negative() {
            return Err(CommerceError::NegativePrice(name));
        }
        Ok(Self {
            id,
            name,
            price,
            category,
        })
    }

    /// Wrap into a shared handle.
    pub fn into_ref(self) -> ProductRef {
        Rc::new(self)
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// The category recorded at construction.
    pub fn category(&self) -> &CategoryId {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let category = CategoryId::new("cat-electronics");
        let product = Product::new(
            "Smartphone1",
            Money::from_major(500, Currency::USD).unwrap(),
            category.clone(),
        )
        .unwrap();

        assert_eq!(product.name(), "Smartphone1");
        assert_eq!(product.price().amount_cents, 50000);
        assert_eq!(product.category(), &category);
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Product::new(
            "Broken",
            Money::new(-1, Currency::USD),
            CategoryId::new("cat-1"),
        );
        assert_eq!(result, Err(CommerceError::NegativePrice("Broken".to_string())));
    }

    #[test]
    fn test_zero_price_allowed() {
        let product = Product::new("Freebie", Money::zero(Currency::USD), CategoryId::new("cat-1"));
        assert!(product.is_ok());
    }

    #[test]
    fn test_same_fields_different_identity() {
        let category = CategoryId::new("cat-1");
        let price = Money::from_major(20, Currency::USD).unwrap();
        let a = Product::new("T-Shirt", price, category.clone()).unwrap();
        let b = Product::new("T-Shirt", price, category).unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }
}
