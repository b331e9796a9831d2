use crate::ui::components::error::ErrorBanner;
use crate::ui::components::loading::Loading;
use crate::ui::components::product_grid::ProductGrid;
use crate::ui::components::search_bar::SearchBar;
use crate::ui::load_state::{use_search_results, LoadState};
use crate::ui::search_params::SearchParams;
use crate::ui::app::product_route;
use dioxus::prelude::*;
use tracing::debug;

/// Results page for `/search?q=...`
#[component]
pub fn SearchPage(params: ReadSignal<SearchParams>) -> Element {
    let query = use_memo(move || params.read().q.clone());
    let results = use_search_results(query);

    debug!("Rendering results for {:?}", query());

    let on_select = use_callback(move |id: String| {
        navigator().push(product_route(&id));
    });

    rsx! {
        main { class: "mx-auto max-w-7xl p-4",
            div { class: "mb-6",
                SearchBar { key: "{query}", initial_query: query() }
            }
            match results() {
                LoadState::Idle => rsx! {
                    ProductGrid { products: Vec::new() }
                },
                LoadState::Loading => rsx! {
                    Loading { message: "Searching local inventory..." }
                },
                LoadState::Failed(message) => rsx! {
                    ErrorBanner { message: format!("Search failed: {message}") }
                },
                LoadState::Loaded(products) => rsx! {
                    ProductGrid { products, on_select }
                },
            }
        }
    }
}
