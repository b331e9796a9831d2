pub mod client;
pub mod models;

pub use client::{SearchClient, SearchError};
pub use models::{ProductSummary, SearchRequest};

use crate::config::ConfigError;

/// What the UI holds: a ready client, or the reason configuration failed.
pub type ApiHandle = Result<SearchClient, ConfigError>;

/// Run a search through `api`, failing before any request when the
/// configuration is missing.
pub async fn search_products(
    api: &ApiHandle,
    query: &str,
) -> Result<Vec<ProductSummary>, SearchError> {
    let client = api.as_ref().map_err(|e| SearchError::Config(e.clone()))?;
    client.search(query).await
}

/// Look up one product through `api`, with the same configuration policy as
/// [`search_products`].
pub async fn fetch_product(api: &ApiHandle, id: &str) -> Result<ProductSummary, SearchError> {
    let client = api.as_ref().map_err(|e| SearchError::Config(e.clone()))?;
    client.product(id).await
}
