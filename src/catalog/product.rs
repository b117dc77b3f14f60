use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::types::ProductNumber;

/// A product as published by the catalog API.
///
/// Only `id` is needed to join against sales. A field that is absent or has an unexpected
/// JSON type is read as `None` without affecting the other fields. Prices are published by
/// the catalog but not used, so they are not decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "de_lenient_opt")]
    pub id: Option<ProductNumber>,
    #[serde(default, deserialize_with = "de_lenient_opt")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_opt")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_opt")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_opt")]
    pub rating: Option<f64>
}

impl Product {
    /// Reads one element of the catalog's `products` array. Elements that are not JSON objects are skipped.
    pub fn from_value(value: Value) -> Option<Self> {
        match serde_json::from_value(value) {
            Ok(product) => Some(product),
            Err(error) => {
                debug!("Skipping catalog element: {error}");
                None
            }
        }
    }
}

fn de_lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}

/// The subset of product metadata used for enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub title: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>
}

/// Product metadata indexed by catalog number.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    entries: HashMap<ProductNumber, CatalogEntry>
}

impl ProductCatalog {
    /// Indexes products by id. Products without an id are ignored and a repeated id keeps the last entry.
    pub fn from_products(products: &[Product]) -> Self {
        let entries = products.iter()
            .filter_map(|product| {
                let id = product.id?;

                Some((id, CatalogEntry {
                    title: product.title.clone(),
                    category: product.category.clone(),
                    brand: product.brand.clone(),
                    rating: product.rating
                }))
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, id: ProductNumber) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }
}
