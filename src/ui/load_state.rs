use crate::api::{fetch_product, search_products, ProductSummary};
use crate::ui::api_context::use_api;
use dioxus::prelude::*;
use tracing::debug;

/// Render state of data fetched for the current route parameter
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing to fetch for this parameter
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T: Clone> LoadState<T> {
    /// State of a fetch given whether it is still running and what it last produced.
    ///
    /// A running fetch is always `Loading`, even when a value from the previous
    /// parameter is still held.
    pub fn from_fetch(pending: bool, value: Option<&Result<T, String>>) -> Self {
        match (pending, value) {
            (true, _) | (false, None) => LoadState::Loading,
            (false, Some(Ok(v))) => LoadState::Loaded(v.clone()),
            (false, Some(Err(e))) => LoadState::Failed(e.clone()),
        }
    }
}

/// Whitespace-only queries are not sent to the API
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Search results for `query`, refetched whenever it changes.
///
/// A change restarts the underlying resource, which drops the future still
/// running for the previous query so its response can never land.
pub fn use_search_results(query: Memo<String>) -> Memo<LoadState<Vec<ProductSummary>>> {
    let api = use_api();

    let results = use_resource(move || {
        let query = query();
        let api = api.clone();
        async move {
            if is_blank_query(&query) {
                return Ok(Vec::new());
            }
            debug!("Fetching search results for {:?}", query);
            search_products(&api, &query)
                .await
                .map_err(|e| e.to_string())
        }
    });

    use_memo(move || {
        if is_blank_query(&query()) {
            return LoadState::Idle;
        }
        let pending = matches!(*results.state().read(), UseResourceState::Pending);
        LoadState::from_fetch(pending, results.value().read().as_ref())
    })
}

/// Product details for `id`, refetched whenever it changes
pub fn use_product(id: Memo<String>) -> Memo<LoadState<ProductSummary>> {
    let api = use_api();

    let product = use_resource(move || {
        let id = id();
        let api = api.clone();
        async move {
            debug!("Fetching product {}", id);
            fetch_product(&api, &id).await.map_err(|e| e.to_string())
        }
    });

    use_memo(move || {
        let pending = matches!(*product.state().read(), UseResourceState::Pending);
        LoadState::from_fetch(pending, product.value().read().as_ref())
    })
}
