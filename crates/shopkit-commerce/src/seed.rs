//! Declarative catalog seed data.
//!
//! A seed lists categories and products by name; [`CatalogSeed::build_catalog`]
//! turns it into a populated [`Catalog`]. Seeds deserialize from TOML or JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Category};
use crate::error::CommerceError;
use crate::ids::CategoryId;
use crate::money::{Currency, Money};

/// Categories and products to load into a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSeed {
    /// Currency for every product price.
    #[serde(default)]
    pub currency: Currency,

    /// Categories, in catalog order.
    #[serde(default)]
    pub categories: Vec<CategorySeed>,

    /// Products, in the order they are added to their categories.
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySeed {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSeed {
    pub name: String,
    /// Price in major units (e.g., 49.99).
    pub price: f64,
    /// Name of the owning category.
    pub category: String,
}

impl CatalogSeed {
    /// The built-in sample: two categories and ten products.
    pub fn sample() -> Self {
        let electronics = [
            ("Smartphone1", 500.0),
            ("Laptop1", 700.0),
            ("Smartphone2", 600.0),
            ("Laptop2", 900.0),
            ("Smartphone3", 800.0),
            ("Laptop3", 1111.0),
            ("Smartphone4", 1000.0),
            ("Laptop4", 1500.0),
        ];
        let clothing = [("T-Shirt", 20.0), ("Jeans", 50.0)];

        let products = electronics
            .iter()
            .map(|(name, price)| ProductSeed::new(*name, *price, "Electronics"))
            .chain(
                clothing
                    .iter()
                    .map(|(name, price)| ProductSeed::new(*name, *price, "Clothing")),
            )
            .collect();

        Self {
            currency: Currency::USD,
            categories: vec![CategorySeed::new("Electronics"), CategorySeed::new("Clothing")],
            products,
        }
    }

    /// Build a catalog with the passthrough lister.
    ///
    /// Fails if two categories share a name, a product names an unknown
    /// category, or a price is negative, not finite, or too large.
    pub fn build_catalog(&self) -> Result<Catalog, CommerceError> {
        let mut catalog = Catalog::new();
        let mut ids: HashMap<&str, CategoryId> = HashMap::new();

        for seed in &self.categories {
            let category = Category::new(seed.name.as_str());
            if ids.insert(seed.name.as_str(), category.id().clone()).is_some() {
                return Err(CommerceError::InvalidConfig(format!(
                    "duplicate category name: {}",
                    seed.name
                )));
            }
            catalog.add_category(category)?;
        }

        for seed in &self.products {
            let category_id = ids.get(seed.category.as_str()).ok_or_else(|| {
                CommerceError::InvalidConfig(format!(
                    "product {} references unknown category {}",
                    seed.name, seed.category
                ))
            })?;
            let price = seed.price_in(self.currency)?;
            let product = catalog
                .category(category_id)
                .ok_or_else(|| CommerceError::CategoryNotFound(category_id.to_string()))?
                .create_product(seed.name.as_str(), price)?;
            catalog.add_product_to_category(product, category_id)?;
        }

        debug!(
            categories = catalog.categories().len(),
            products = catalog.product_count(),
            "catalog seeded"
        );
        Ok(catalog)
    }
}

impl CategorySeed {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ProductSeed {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Convert the decimal price to minor units.
    fn price_in(&self, currency: Currency) -> Result<Money, CommerceError> {
        if self.price < 0.0 {
            return Err(CommerceError::InvalidConfig(format!(
                "product {} has a negative price: {}",
                self.name, self.price
            )));
        }
        Money::from_decimal(self.price, currency).ok_or_else(|| {
            CommerceError::InvalidConfig(format!(
                "product {} has an unrepresentable price: {}",
                self.name, self.price
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = CatalogSeed::sample().build_catalog().unwrap();

        let names: Vec<&str> = catalog.categories().iter().map(Category::name).collect();
        assert_eq!(names, vec!["Electronics", "Clothing"]);
        assert_eq!(catalog.category_by_name("Electronics").unwrap().len(), 8);
        assert_eq!(catalog.category_by_name("Clothing").unwrap().len(), 2);

        let laptop3 = catalog.find_product_by_name("Laptop3").unwrap();
        assert_eq!(laptop3.price().display_plain(), "1111");
    }

    #[test]
    fn test_sample_report_tail() {
        let report = CatalogSeed::sample().build_catalog().unwrap().report().to_string();
        assert!(report.starts_with("All Products:\nCategory: Electronics, Product: Smartphone1, Price: 500\n"));
        assert!(report.ends_with("Category: Clothing, Product: Jeans, Price: 50\n"));
        assert_eq!(report.lines().count(), 11);
    }

    #[test]
    fn test_unknown_category_is_invalid() {
        let seed = CatalogSeed {
            currency: Currency::USD,
            categories: vec![CategorySeed::new("Books")],
            products: vec![ProductSeed::new("Socks", 5.0, "Clothing")],
        };
        assert!(matches!(seed.build_catalog(), Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_category_name_is_invalid() {
        let seed = CatalogSeed {
            currency: Currency::USD,
            categories: vec![CategorySeed::new("Books"), CategorySeed::new("Books")],
            products: Vec::new(),
        };
        assert!(matches!(seed.build_catalog(), Err(CommerceError::InvalidConfig(_))));
    }

    fn single_product(price: f64) -> CatalogSeed {
        CatalogSeed {
            currency: Currency::USD,
            categories: vec![CategorySeed::new("Books")],
            products: vec![ProductSeed::new("Item", price, "Books")],
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matches!(
            single_product(-1.0).build_catalog(),
            Err(CommerceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_tiny_negative_price_not_rounded_to_zero() {
        assert!(matches!(
            single_product(-0.004).build_catalog(),
            Err(CommerceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                single_product(price).build_catalog(),
                Err(CommerceError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_out_of_range_price_rejected() {
        let err = single_product(1e300).build_catalog().unwrap_err();
        assert!(matches!(err, CommerceError::InvalidConfig(ref msg) if msg.contains("Item")));
    }

    #[test]
    fn test_zero_price_allowed() {
        let catalog = single_product(0.0).build_catalog().unwrap();
        let item = catalog.find_product_by_name("Item").unwrap();
        assert!(item.price().is_zero());
    }

    #[test]
    fn test_currency_code_any_case() {
        let seed: CatalogSeed = serde_json::from_str(r#"{ "currency": "jpy" }"#).unwrap();
        assert_eq!(seed.currency, Currency::JPY);
    }

    #[test]
    fn test_seed_from_json() {
        let json = r#"{
            "currency": "EUR",
            "categories": [{ "name": "Books" }],
            "products": [{ "name": "Rust Book", "price": 39.9, "category": "Books" }]
        }"#;
        let seed: CatalogSeed = serde_json::from_str(json).unwrap();
        let catalog = seed.build_catalog().unwrap();
        let book = catalog.find_product_by_name("Rust Book").unwrap();

        assert_eq!(book.price(), Money::new(3990, Currency::EUR));
        assert_eq!(book.price().display_plain(), "39.9");
    }
}
