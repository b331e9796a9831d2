use crate::api::ProductSummary;
use crate::ui::app::product_id;
use crate::ui::components::error::ErrorBanner;
use crate::ui::components::loading::Loading;
use crate::ui::components::vibe_tag::VibeTag;
use crate::ui::load_state::{use_product, LoadState};
use dioxus::prelude::*;

/// Product detail page for `/product/<id>`
#[component]
pub fn ProductDetails(segments: ReadSignal<Vec<String>>) -> Element {
    let id = use_memo(move || product_id(&segments.read()));
    let product = use_product(id);

    rsx! {
        main { class: "mx-auto max-w-4xl p-4",
            h1 { class: "text-2xl font-semibold", "Product {id}" }
            match product() {
                LoadState::Idle | LoadState::Loading => rsx! {
                    Loading { message: "Loading product..." }
                },
                LoadState::Failed(message) => rsx! {
                    div { class: "mt-4",
                        ErrorBanner { message: format!("Failed to load product: {message}") }
                    }
                },
                LoadState::Loaded(product) => rsx! {
                    ProductInfo { product }
                },
            }
        }
    }
}

#[component]
fn ProductInfo(product: ProductSummary) -> Element {
    rsx! {
        section { class: "mt-4 grid gap-6 md:grid-cols-2",
            div { class: "aspect-[4/5] rounded-xl bg-zinc-100" }
            div {
                h2 { class: "text-xl font-medium", "{product.title}" }
                p { class: "mt-2 text-lg font-semibold", "{product.price}" }
                p { class: "text-zinc-600", "{product.store_name}" }
                if !product.vibes.is_empty() {
                    div { class: "mt-3 flex flex-wrap gap-1",
                        for vibe in product.vibes.iter() {
                            VibeTag { label: vibe.clone() }
                        }
                    }
                }
            }
        }
    }
}
