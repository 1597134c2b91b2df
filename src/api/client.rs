use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::api::types::{Category, NewProduct, Product, ProductEdit, ProductPatch};
use crate::config::ApiConfig;

/// Typed client for the remote catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full product list. Failure here is fatal for the first
    /// table render, so it surfaces as an error.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self.client.get(self.url("/products")).send().await?;
        let resp = expect_success(resp).await?;
        let products = resp.json::<Vec<Product>>().await?;
        info!(count = products.len(), "loaded product list");
        Ok(products)
    }

    /// Fetch the category list. The category picker is a convenience, so
    /// any failure degrades to an empty list instead of an error.
    pub async fn list_categories(&self) -> Vec<Category> {
        let result = async {
            let resp = self.client.get(self.url("/categories")).send().await?;
            let resp = expect_success(resp).await?;
            resp.json::<Vec<Category>>().await.map_err(ApiError::from)
        }
        .await;

        match result {
            Ok(categories) => categories,
            Err(err) => {
                warn!(error = %err, "category fetch failed, continuing without");
                Vec::new()
            }
        }
    }

    /// Update a product. Returns the server response as a patch so the
    /// caller can merge it without clobbering fields the server omitted.
    pub async fn update_product(&self, id: u64, edit: &ProductEdit) -> Result<ProductPatch, ApiError> {
        let resp = self
            .client
            .put(self.url(&format!("/products/{}", id)))
            .json(edit)
            .send()
            .await?;
        let resp = expect_success(resp).await?;
        let patch = resp.json::<ProductPatch>().await?;
        info!(id, "product updated");
        Ok(patch)
    }

    pub async fn create_product(&self, new: &NewProduct) -> Result<Product, ApiError> {
        let resp = self
            .client
            .post(self.url("/products/"))
            .json(new)
            .send()
            .await?;
        let resp = expect_success(resp).await?;
        let product = resp.json::<Product>().await?;
        info!(id = product.id, "product created");
        Ok(product)
    }
}

/// Turn a non-success status into `ApiError::Service` carrying the body
/// text as the message.
async fn expect_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(ApiError::Service {
        status: status.as_u16(),
        message,
    })
}
