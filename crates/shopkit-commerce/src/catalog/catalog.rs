//! The catalog: owner of all categories and of the listing strategy.

use std::fmt;
use std::io;

use crate::catalog::{Category, PassthroughLister, ProductLister, ProductRef};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::Serialize;
use tracing::{debug, warn};

/// Top-level owner of categories.
///
/// Categories are kept in insertion order. Product listing goes through the
/// configured [`ProductLister`], which defaults to [`PassthroughLister`].
pub struct Catalog {
    categories: Vec<Category>,
    lister: Box<dyn ProductLister>,
}

impl Catalog {
    /// Create an empty catalog with the passthrough lister.
    pub fn new() -> Self {
        Self::with_lister(PassthroughLister)
    }

    /// Create an empty catalog with a custom listing strategy.
    pub fn with_lister(lister: impl ProductLister + 'static) -> Self {
        Self {
            categories: Vec::new(),
            lister: Box::new(lister),
        }
    }

    /// Replace the listing strategy.
    pub fn set_lister(&mut self, lister: impl ProductLister + 'static) {
        self.lister = Box::new(lister);
    }

    /// Take ownership of a category and append it.
    ///
    /// Returns an error if a category with the same id is already owned.
    pub fn add_category(&mut self, category: Category) -> Result<(), CommerceError> {
        if self.category(category.id()).is_some() {
            warn!(category_id = %category.id(), "rejected duplicate category");
            return Err(CommerceError::DuplicateCategory(category.id().to_string()));
        }
        debug!(category_id = %category.id(), name = category.name(), "category added");
        self.categories.push(category);
        Ok(())
    }

    /// Append a product to one of the catalog's categories.
    ///
    /// Same effect as `Category::add_product` on the owned category, with two
    /// preconditions checked first: the category must belong to this catalog,
    /// and the product's recorded category must be that category. A product is
    /// never re-homed to make the second check pass.
    pub fn add_product_to_category(
        &mut self,
        product: ProductRef,
        category_id: &CategoryId,
    ) -> Result<(), CommerceError> {
        let Some(category) = self.categories.iter_mut().find(|c| c.id() == category_id) else {
            warn!(category_id = %category_id, product = product.name(), "category not in catalog");
            return Err(CommerceError::CategoryNotFound(category_id.to_string()));
        };

        if product.category() != category_id {
            warn!(
                product = product.name(),
                expected = %product.category(),
                actual = %category_id,
                "product added to a category it does not record"
            );
            return Err(CommerceError::CategoryMismatch {
                product: product.name().to_string(),
                expected: product.category().to_string(),
                actual: category_id.to_string(),
            });
        }

        debug!(product = product.name(), category = category.name(), "product added");
        category.add_product(product);
        Ok(())
    }

    /// All owned categories in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// First category with this name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Products of a category, as the listing strategy presents them.
    pub fn products_by_category(&self, category: &Category) -> Vec<ProductRef> {
        self.lister.list_products(category)
    }

    /// Find a product by id across all categories.
    pub fn find_product(&self, id: &ProductId) -> Option<&ProductRef> {
        self.categories
            .iter()
            .flat_map(|c| c.products())
            .find(|p| p.id() == id)
    }

    /// Find the first product with this name, in catalog order.
    pub fn find_product_by_name(&self, name: &str) -> Option<&ProductRef> {
        self.categories
            .iter()
            .flat_map(|c| c.products())
            .find(|p| p.name() == name)
    }

    /// Number of product entries across all categories, before listing.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Walk every category in order and every product its lister returns.
    pub fn listing(&self) -> Vec<CatalogLine> {
        self.categories
            .iter()
            .flat_map(|category| {
                self.products_by_category(category)
                    .into_iter()
                    .map(move |product| CatalogLine {
                        category: category.name().to_string(),
                        product: product.name().to_string(),
                        price: product.price(),
                    })
            })
            .collect()
    }

    /// Build the text report of all listed products.
    pub fn report(&self) -> CatalogReport {
        CatalogReport {
            lines: self.listing(),
        }
    }

    /// Write the catalog report.
    pub fn print_all_products(&self, out: &mut impl io::Write) -> io::Result<()> {
        write!(out, "{}", self.report())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

/// One line of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogLine {
    pub category: String,
    pub product: String,
    pub price: Money,
}

/// The catalog-wide product listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub lines: Vec<CatalogLine>,
}

impl CatalogReport {
    pub const HEADER: &'static str = "All Products:";
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        for line in &self.lines {
            writeln!(
                f,
                "Category: {}, Product: {}, Price: {}",
                line.category,
                line.product,
                line.price.display_plain()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CappedLister, SortOption, SortedLister};
    use crate::money::Currency;
    use std::rc::Rc;

    fn usd(major: i64) -> Money {
        Money::from_major(major, Currency::USD).unwrap()
    }

    /// Electronics [Smartphone1 500, Laptop1 700] and Clothing [T-Shirt 20, Jeans 50].
    fn sample_catalog() -> Catalog {
        let electronics = Category::new("Electronics");
        let clothing = Category::new("Clothing");
        let phone = electronics.create_product("Smartphone1", usd(500)).unwrap();
        let laptop = electronics.create_product("Laptop1", usd(700)).unwrap();
        let shirt = clothing.create_product("T-Shirt", usd(20)).unwrap();
        let jeans = clothing.create_product("Jeans", usd(50)).unwrap();
        let (electronics_id, clothing_id) = (electronics.id().clone(), clothing.id().clone());

        let mut catalog = Catalog::new();
        catalog.add_category(electronics).unwrap();
        catalog.add_category(clothing).unwrap();
        catalog.add_product_to_category(phone, &electronics_id).unwrap();
        catalog.add_product_to_category(laptop, &electronics_id).unwrap();
        catalog.add_product_to_category(shirt, &clothing_id).unwrap();
        catalog.add_product_to_category(jeans, &clothing_id).unwrap();
        catalog
    }

    fn render(catalog: &Catalog) -> String {
        let mut out = Vec::new();
        catalog.print_all_products(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_categories_keep_insertion_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.categories().iter().map(Category::name).collect();
        assert_eq!(names, vec!["Electronics", "Clothing"]);
        assert_eq!(catalog.product_count(), 4);
    }

    #[test]
    fn test_default_lister_matches_category_products() {
        let catalog = sample_catalog();
        for category in catalog.categories() {
            let listed = catalog.products_by_category(category);
            assert_eq!(listed.len(), category.len());
            for (a, b) in listed.iter().zip(category.products()) {
                assert!(Rc::ptr_eq(a, b));
            }
        }
    }

    #[test]
    fn test_print_all_products_format() {
        let expected = "All Products:\n\
            Category: Electronics, Product: Smartphone1, Price: 500\n\
            Category: Electronics, Product: Laptop1, Price: 700\n\
            Category: Clothing, Product: T-Shirt, Price: 20\n\
            Category: Clothing, Product: Jeans, Price: 50\n";
        assert_eq!(render(&sample_catalog()), expected);
    }

    #[test]
    fn test_empty_catalog_prints_header_only() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(render(&catalog), "All Products:\n");
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut catalog = Catalog::new();
        let books = Category::new("Books");
        catalog.add_category(books.clone()).unwrap();

        let err = catalog.add_category(books.clone()).unwrap_err();
        assert_eq!(err, CommerceError::DuplicateCategory(books.id().to_string()));
        assert_eq!(catalog.categories().len(), 1);
    }

    #[test]
    fn test_same_name_different_category_allowed() {
        let mut catalog = Catalog::new();
        catalog.add_category(Category::new("Sale")).unwrap();
        catalog.add_category(Category::new("Sale")).unwrap();
        assert_eq!(catalog.categories().len(), 2);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut catalog = Catalog::new();
        let orphan = Category::new("Orphan");
        let product = orphan.create_product("Thing", usd(1)).unwrap();

        let err = catalog
            .add_product_to_category(product, orphan.id())
            .unwrap_err();
        assert_eq!(err, CommerceError::CategoryNotFound(orphan.id().to_string()));
    }

    #[test]
    fn test_category_mismatch_rejected_and_not_rehomed() {
        let mut catalog = sample_catalog();
        let electronics_id = catalog.category_by_name("Electronics").unwrap().id().clone();
        let clothing_id = catalog.category_by_name("Clothing").unwrap().id().clone();
        let tablet = catalog
            .category(&electronics_id)
            .unwrap()
            .create_product("Tablet", usd(300))
            .unwrap();

        let err = catalog
            .add_product_to_category(tablet.clone(), &clothing_id)
            .unwrap_err();

        assert!(matches!(err, CommerceError::CategoryMismatch { .. }));
        assert_eq!(tablet.category(), &electronics_id);
        assert_eq!(catalog.category(&clothing_id).unwrap().len(), 2);
        assert_eq!(catalog.category(&electronics_id).unwrap().len(), 2);
    }

    #[test]
    fn test_custom_lister_changes_listing_only() {
        let mut catalog = sample_catalog();
        catalog.set_lister(SortedLister::new(SortOption::PriceDesc));

        let electronics = catalog.category_by_name("Electronics").unwrap();
        let listed = catalog.products_by_category(electronics);
        let names: Vec<&str> = listed.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Laptop1", "Smartphone1"]);
        assert_eq!(electronics.products()[0].name(), "Smartphone1");
    }

    #[test]
    fn test_capped_lister_in_report() {
        let mut catalog = sample_catalog();
        catalog.set_lister(CappedLister::new(1));

        let report = catalog.report();
        let products: Vec<&str> = report.lines.iter().map(|l| l.product.as_str()).collect();
        assert_eq!(products, vec!["Smartphone1", "T-Shirt"]);
    }

    #[test]
    fn test_closure_lister_injected() {
        let mut catalog = sample_catalog();
        catalog.set_lister(|_: &Category| -> Vec<ProductRef> { Vec::new() });
        assert_eq!(render(&catalog), "All Products:\n");
    }

    #[test]
    fn test_find_product() {
        let catalog = sample_catalog();
        let jeans = catalog.find_product_by_name("Jeans").unwrap().clone();
        let found = catalog.find_product(jeans.id()).unwrap();
        assert!(Rc::ptr_eq(found, &jeans));
        assert!(catalog.find_product_by_name("Socks").is_none());
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(sample_catalog().report()).unwrap();
        assert_eq!(json["lines"][0]["category"], "Electronics");
        assert_eq!(json["lines"][0]["price"]["amount_cents"], 50000);
    }
}
