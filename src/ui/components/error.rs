use crate::ui::api_context::use_api;
use dioxus::prelude::*;

/// Inline error banner
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded-xl mb-4",
            role: "alert",
            p { "{message}" }
        }
    }
}

/// Shown on every page while the search API is not configured
#[component]
pub fn ConfigErrorBanner() -> Element {
    let api = use_api();

    match api {
        Ok(_) => rsx! {},
        Err(e) => rsx! {
            div { class: "mx-auto max-w-7xl px-4 pt-4",
                ErrorBanner { message: format!("Search is unavailable: {e}") }
            }
        },
    }
}
