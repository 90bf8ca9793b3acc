//! CLI configuration: catalog seed plus listing defaults.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shopkit_commerce::catalog::{
    CappedLister, ChainedLister, PriceRangeLister, SortOption, SortedLister,
};
use shopkit_commerce::seed::CatalogSeed;
use shopkit_commerce::Money;

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Catalog contents. Lives at the top level of the file.
    #[serde(flatten)]
    pub seed: CatalogSeed,

    /// Default listing strategy.
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Default for ShopConfig {
    /// The built-in sample catalog with passthrough listing.
    fn default() -> Self {
        Self {
            seed: CatalogSeed::sample(),
            listing: ListingConfig::default(),
        }
    }
}

impl ShopConfig {
    /// Load config from a TOML or JSON file, chosen by extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// How the catalog presents each category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingConfig {
    /// Sort order (e.g., "price-asc").
    #[serde(default)]
    pub sort: Option<SortOption>,

    /// Lowest price shown, in major units.
    #[serde(default)]
    pub min_price: Option<f64>,

    /// Highest price shown, in major units.
    #[serde(default)]
    pub max_price: Option<f64>,

    /// Maximum products shown per category.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListingConfig {
    /// Overlay values from another config; set fields in `other` win.
    pub fn merge(&self, other: &ListingConfig) -> ListingConfig {
        ListingConfig {
            sort: other.sort.or(self.sort),
            min_price: other.min_price.or(self.min_price),
            max_price: other.max_price.or(self.max_price),
            limit: other.limit.or(self.limit),
        }
    }

    /// Build the lister: price filter, then sort, then cap.
    ///
    /// Fails if a price bound is not a representable amount.
    pub fn build_lister(&self, seed: &CatalogSeed) -> Result<ChainedLister> {
        let mut lister = ChainedLister::new();

        if self.min_price.is_some() || self.max_price.is_some() {
            let to_money = |amount: Option<f64>| -> Result<Option<Money>> {
                amount
                    .map(|value| {
                        Money::from_decimal(value, seed.currency)
                            .ok_or_else(|| anyhow!("Invalid price bound: {}", value))
                    })
                    .transpose()
            };
            lister = lister.then(PriceRangeLister::new(
                to_money(self.min_price)?,
                to_money(self.max_price)?,
            ));
        }
        if let Some(sort) = self.sort {
            lister = lister.then(SortedLister::new(sort));
        }
        if let Some(limit) = self.limit {
            lister = lister.then(CappedLister::new(limit));
        }

        Ok(lister)
    }
}

const LISTING_TEMPLATE: &str = r#"
[listing]
# sort = "price-asc"
# min_price = 10.0
# max_price = 1000.0
# limit = 5
"#;

/// Generate a default shopkit.toml holding the sample catalog.
pub fn generate_default_config() -> Result<String> {
    let body = toml::to_string(&CatalogSeed::sample()).context("Failed to serialize sample catalog")?;
    Ok(format!(
        "# ShopKit catalog configuration\n\n{}{}",
        body, LISTING_TEMPLATE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkit_commerce::seed::{CategorySeed, ProductSeed};
    use shopkit_commerce::Currency;

    #[test]
    fn test_default_config_round_trips_sample() {
        let config: ShopConfig = toml::from_str(&generate_default_config().unwrap()).unwrap();
        assert_eq!(config.seed, CatalogSeed::sample());
        assert_eq!(config.listing, ListingConfig::default());
    }

    #[test]
    fn test_seed_strings_escaped_as_toml() {
        let seed = CatalogSeed {
            currency: Currency::EUR,
            categories: vec![CategorySeed::new("Caf\u{e9} \"Bar\"\u{85}")],
            products: vec![ProductSeed::new("Tab\there", 2.5, "Caf\u{e9} \"Bar\"\u{85}")],
        };
        let parsed: CatalogSeed = toml::from_str(&toml::to_string(&seed).unwrap()).unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn test_invalid_price_bound_rejected() {
        let listing = ListingConfig {
            max_price: Some(f64::NAN),
            ..ListingConfig::default()
        };
        let err = listing.build_lister(&CatalogSeed::sample()).err().expect("expected build_lister to fail");
        assert!(err.to_string().contains("Invalid price bound"));
    }

    #[test]
    fn test_parse_toml_with_listing() {
        let config: ShopConfig = toml::from_str(
            r#"
currency = "EUR"

[listing]
sort = "price-desc"
limit = 1

[[categories]]
name = "Books"

[[products]]
name = "Rust Book"
price = 39.9
category = "Books"
"#,
        )
        .unwrap();

        assert_eq!(config.seed.currency, Currency::EUR);
        assert_eq!(config.seed.products.len(), 1);
        assert_eq!(config.listing.sort, Some(SortOption::PriceDesc));
        assert_eq!(config.listing.limit, Some(1));
    }

    #[test]
    fn test_parse_json() {
        let config: ShopConfig = serde_json::from_str(
            r#"{ "categories": [{ "name": "Toys" }], "products": [] }"#,
        )
        .unwrap();
        assert_eq!(config.seed.categories[0].name, "Toys");
        assert_eq!(config.seed.currency, Currency::USD);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = ListingConfig {
            sort: Some(SortOption::NameAsc),
            limit: Some(3),
            ..ListingConfig::default()
        };
        let overrides = ListingConfig {
            sort: Some(SortOption::PriceAsc),
            max_price: Some(100.0),
            ..ListingConfig::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.sort, Some(SortOption::PriceAsc));
        assert_eq!(merged.limit, Some(3));
        assert_eq!(merged.max_price, Some(100.0));
    }

    #[test]
    fn test_build_lister_stages() {
        let seed = CatalogSeed::sample();
        assert!(ListingConfig::default().build_lister(&seed).unwrap().is_empty());

        let listing = ListingConfig {
            sort: Some(SortOption::PriceDesc),
            max_price: Some(900.0),
            limit: Some(2),
            ..ListingConfig::default()
        };
        let mut catalog = seed.build_catalog().unwrap();
        catalog.set_lister(listing.build_lister(&seed).unwrap());

        let products: Vec<String> = catalog.report().lines.into_iter().map(|l| l.product).collect();
        assert_eq!(products, vec!["Laptop2", "Smartphone3", "Jeans", "T-Shirt"]);
    }
}
