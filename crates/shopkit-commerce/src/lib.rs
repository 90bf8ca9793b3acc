//! In-memory catalog and shopping cart types for ShopKit.
//!
//! - **Catalog**: products, categories, and pluggable listing strategies
//! - **Cart**: per-user carts that accumulate products and price them
//! - **Seed**: declarative catalog data loadable from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use shopkit_commerce::prelude::*;
//!
//! let electronics = Category::new("Electronics");
//! let phone = electronics
//!     .create_product("Smartphone1", Money::from_major(500, Currency::USD).unwrap())
//!     .unwrap();
//! let electronics_id = electronics.id().clone();
//!
//! let mut catalog = Catalog::new();
//! catalog.add_category(electronics).unwrap();
//! catalog.add_product_to_category(phone.clone(), &electronics_id).unwrap();
//!
//! let mut cart = Cart::new(UserId::new("alice"), Currency::USD);
//! cart.add_product(phone.clone()).unwrap();
//! cart.add_product(phone).unwrap();
//!
//! assert_eq!(cart.total().unwrap(), Money::from_major(1000, Currency::USD).unwrap());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod seed;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CappedLister, Catalog, CatalogReport, Category, ChainedLister, PassthroughLister,
        PriceRangeLister, Product, ProductLister, ProductRef, SortOption, SortedLister,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, CartReport, Carts};

    // Seed
    pub use crate::seed::{CatalogSeed, CategorySeed, ProductSeed};
}
