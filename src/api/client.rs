use crate::api::models::{ProductSummary, SearchRequest, SearchResponseBody};
use crate::config::{Config, ConfigError};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    /// Any non-success status from the search endpoint. The status is kept for logs only.
    #[error("Search request failed")]
    RequestFailed { status: u16 },
    /// Any non-success status other than 404 from a product lookup
    #[error("Product request failed")]
    LookupFailed { status: u16 },
    #[error("Product not found")]
    NotFound,
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the inventory search API.
///
/// One request per call: no retry, timeout, backoff or caching.
#[derive(Clone, Debug)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl PartialEq for SearchClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl SearchClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search products matching `query`, in the order the API returns them
    pub async fn search(&self, query: &str) -> Result<Vec<ProductSummary>, SearchError> {
        let url = format!("{}/search", self.base_url);
        debug!("POST {} query={:?}", url, query);

        let response = self
            .client
            .post(&url)
            .json(&SearchRequest {
                query: query.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search for {:?} failed with status {}", query, status);
            return Err(SearchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let products = serde_json::from_str::<SearchResponseBody>(&body)?.into_products();
        info!("Search for {:?} returned {} products", query, products.len());

        Ok(products)
    }

    /// Fetch a single product summary by identifier
    pub async fn product(&self, id: &str) -> Result<ProductSummary, SearchError> {
        let url = format!("{}/products/{}", self.base_url, urlencoding::encode(id));
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SearchError::NotFound);
        } else if !status.is_success() {
            warn!("Product lookup for {} failed with status {}", id, status);
            return Err(SearchError::LookupFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check that the API answers its health endpoint
    pub async fn health(&self) -> Result<(), SearchError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SearchError::RequestFailed {
                status: response.status().as_u16(),
            })
        }
    }
}
