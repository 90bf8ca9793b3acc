//! Category type for product organization.

use crate::catalog::{Product, ProductRef};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;

/// A named grouping of products.
///
/// Products are kept in insertion order and duplicates are allowed. The
/// category holds shared handles, so a product may also sit in carts.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: String,
    products: Vec<ProductRef>,
}

impl Category {
    /// Create an empty category with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(CategoryId::generate(), name)
    }

    /// Create an empty category with a caller-supplied id.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a product whose back-reference points at this category.
    ///
    /// The product is not added; pass it to [`Category::add_product`] or
    /// `Catalog::add_product_to_category`.
    pub fn create_product(
        &self,
        name: impl Into<String>,
        price: Money,
    ) -> Result<ProductRef, CommerceError> {
        Product::new(name, price, self.id.clone()).map(Product::into_ref)
    }

    /// Append a product.
    ///
    /// Does not check that `product.category()` names this category; that
    /// check lives in `Catalog::add_product_to_category`.
    pub fn add_product(&mut self, product: ProductRef) {
        self.products.push(product);
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[ProductRef] {
        &self.products
    }

    /// Check whether a product with this id has been added.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.iter().any(|p| p.id() == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
