use serde::{Deserialize, Serialize};

/// The minimal record needed to render one search-result card.
///
/// `price` is a display string as returned by the API; no currency
/// arithmetic is performed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub store_name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vibes: Vec<String>,
}

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// The search endpoint answers either with a bare list or with the
/// paged envelope the inventory API uses. Both carry the products in
/// API order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchResponseBody {
    List(Vec<ProductSummary>),
    Envelope {
        products: Vec<ProductSummary>,
        #[allow(dead_code)]
        #[serde(default)]
        total: Option<u64>,
    },
}

impl SearchResponseBody {
    pub(crate) fn into_products(self) -> Vec<ProductSummary> {
        match self {
            SearchResponseBody::List(products) => products,
            SearchResponseBody::Envelope { products, .. } => products,
        }
    }
}
