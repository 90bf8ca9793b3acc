//! Product catalog module.
//!
//! Contains products, categories, the catalog that owns them, and the
//! listing strategies the catalog uses to present a category.

mod catalog;
mod category;
mod lister;
mod product;

pub use catalog::{Catalog, CatalogLine, CatalogReport};
pub use category::Category;
pub use lister::{
    CappedLister, ChainedLister, PassthroughLister, PriceRangeLister, ProductLister, SortOption,
    SortedLister,
};
pub use product::{Product, ProductRef};
