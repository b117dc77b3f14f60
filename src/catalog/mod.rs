mod client;
mod errors;
mod product;

use std::future::Future;

pub use client::{HttpCatalogClient, DEFAULT_CATALOG_TIMEOUT, DEFAULT_CATALOG_URL};
pub use errors::CatalogError;
pub use product::{Product, ProductCatalog};

/// A source of product metadata.
///
/// Implementations never fail: any problem reaching the catalog is logged and reported as an
/// empty product list, which downstream treats as "nothing matched".
pub trait CatalogSource: Send + Sync {
    fn fetch_all_products(&self) -> impl Future<Output = Vec<Product>> + Send;
}
