//! Listing strategies: how a category turns into an ordered product list.
//!
//! The catalog asks its [`ProductLister`] for a category's products every time
//! it lists them. [`PassthroughLister`] is the default; the others filter,
//! sort or cap without the catalog's public API changing.

use crate::catalog::{Category, ProductRef};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Given a category, return the products to show for it, in display order.
pub trait ProductLister {
    fn list_products(&self, category: &Category) -> Vec<ProductRef>;
}

impl<F> ProductLister for F
where
    F: Fn(&Category) -> Vec<ProductRef>,
{
    fn list_products(&self, category: &Category) -> Vec<ProductRef> {
        self(category)
    }
}

/// Returns the category's products unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLister;

impl ProductLister for PassthroughLister {
    fn list_products(&self, category: &Category) -> Vec<ProductRef> {
        category.products().to_vec()
    }
}

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Insertion order.
    #[default]
    Position,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Position => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }

    /// Parse a kebab-case option name (e.g., "price-asc").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "position" => Some(SortOption::Position),
            "price-asc" => Some(SortOption::PriceAsc),
            "price-desc" => Some(SortOption::PriceDesc),
            "name-asc" => Some(SortOption::NameAsc),
            "name-desc" => Some(SortOption::NameDesc),
            _ => None,
        }
    }
}

/// Sorts a category's products. The sort is stable: ties keep insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedLister {
    pub sort: SortOption,
}

impl SortedLister {
    pub fn new(sort: SortOption) -> Self {
        Self { sort }
    }
}

impl ProductLister for SortedLister {
    fn list_products(&self, category: &Category) -> Vec<ProductRef> {
        let mut products = category.products().to_vec();
        match self.sort {
            SortOption::Position => {}
            SortOption::PriceAsc => {
                products.sort_by_key(|p| p.price().amount_cents);
            }
            SortOption::PriceDesc => {
                products.sort_by(|a, b| b.price().amount_cents.cmp(&a.price().amount_cents));
            }
            SortOption::NameAsc => {
                products.sort_by(|a, b| a.name().cmp(b.name()));
            }
            SortOption::NameDesc => {
                products.sort_by(|a, b| b.name().cmp(a.name()));
            }
        }
        products
    }
}

/// Keeps products priced within an inclusive range. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRangeLister {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRangeLister {
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    fn accepts(&self, price: Money) -> bool {
        let above_min = self
            .min
            .map_or(true, |min| price.amount_cents >= min.amount_cents);
        let below_max = self
            .max
            .map_or(true, |max| price.amount_cents <= max.amount_cents);
        above_min && below_max
    }
}

impl ProductLister for PriceRangeLister {
    fn list_products(&self, category: &Category) -> Vec<ProductRef> {
        category
            .products()
            .iter()
            .filter(|p| self.accepts(p.price()))
            .cloned()
            .collect()
    }
}

/// Keeps at most `limit` products per category, in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct CappedLister {
    pub limit: usize,
}

impl CappedLister {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl ProductLister for CappedLister {
    fn list_products(&self, category: &Category) -> Vec<ProductRef> {
        category.products().iter().take(self.limit).cloned().collect()
    }
}

/// Applies listers in order, each one seeing the previous one's output.
#[derive(Default)]
pub struct ChainedLister {
    stages: Vec<Box<dyn ProductLister>>,
}

impl ChainedLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stage to the end of the chain.
    pub fn then(mut self, lister: impl ProductLister + 'static) -> Self {
        self.stages.push(Box::new(lister));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl ProductLister for ChainedLister {
    fn list_products(&self, category: &Category) -> Vec<ProductRef> {
        let mut products = category.products().to_vec();
        for stage in &self.stages {
            // Each stage works on a scratch category holding the previous output.
            let mut scratch = Category::with_id(category.id().clone(), category.name());
            for product in products {
                scratch.add_product(product);
            }
            products = stage.list_products(&scratch);
        }
        products
    }
}
