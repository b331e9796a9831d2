use dioxus::router::FromQuery;
use std::fmt;

/// Query string of the results page: `q=<percent-encoded query>`.
///
/// The query is carried verbatim. An empty query is valid and renders as `q=`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub q: String,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q={}", urlencoding::encode(&self.q))
    }
}

impl FromQuery for SearchParams {
    /// The router hands over the query string already percent-decoded, so
    /// everything after a leading `q=` is the query verbatim, `&` and `=`
    /// included.
    fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let q = match query.strip_prefix("q=") {
            Some(value) => value,
            None => query
                .split('&')
                .find_map(|pair| pair.strip_prefix("q="))
                .unwrap_or_default(),
        };

        Self { q: q.to_string() }
    }
}

/// Address of the results page for `query`
pub fn search_href(query: &str) -> String {
    format!("/search?{}", SearchParams::new(query))
}
