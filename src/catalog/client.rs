use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::errors::CatalogError;
use crate::catalog::product::Product;
use crate::catalog::CatalogSource;

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products?limit=100";
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    #[serde(default)]
    products: Vec<Value>
}

impl CatalogResponse {
    //NOTE: Each element is decoded on its own and a malformed one is skipped
    pub(crate) fn into_products(self) -> Vec<Product> {
        self.products.into_iter().filter_map(Product::from_value).collect()
    }
}

/// Fetches the product list over HTTP with a single GET.
///
/// There is no retry. The timeout bounds both connecting and reading the response.
pub struct HttpCatalogClient {
    client: Client,
    url: String
}

impl HttpCatalogClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            url: url.into()
        })
    }

    async fn try_fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(&self.url)
            .send()
            .await
            .map_err(CatalogError::Request)?;

        //NOTE: Only a plain 200 counts as success, other 2xx codes carry no product list
        if response.status() != StatusCode::OK {
            return Err(CatalogError::Status(response.status()));
        }

        let body: CatalogResponse = response.json().await.map_err(CatalogError::Decode)?;

        Ok(body.into_products())
    }
}

impl CatalogSource for HttpCatalogClient {
    async fn fetch_all_products(&self) -> Vec<Product> {
        match self.try_fetch_all_products().await {
            Ok(products) => {
                info!("Successfully fetched {} products from [{}]", products.len(), self.url);
                products
            }
            Err(error) => {
                warn!("{error}");
                Vec::new()
            }
        }
    }
}
