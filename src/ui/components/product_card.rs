use crate::api::ProductSummary;
use crate::ui::components::vibe_tag::VibeTag;
use dioxus::prelude::*;

/// One search result: image placeholder, title, price and store
#[component]
pub fn ProductCard(product: ProductSummary, on_select: Option<EventHandler<String>>) -> Element {
    let product_id = product.id.clone();

    rsx! {
        article {
            class: "rounded-xl border border-zinc-200 bg-white p-3 shadow-sm cursor-pointer hover:shadow-md transition-shadow",
            "data-product-id": "{product.id}",
            onclick: move |_| {
                if let Some(handler) = on_select {
                    handler.call(product_id.clone());
                }
            },

            // No product imagery yet
            div { class: "mb-3 aspect-[4/5] rounded-lg bg-zinc-100" }

            h3 {
                class: "line-clamp-2 text-sm font-medium",
                title: "{product.title}",
                "{product.title}"
            }
            p { class: "mt-1 text-sm font-semibold", "{product.price}" }
            p { class: "text-xs text-zinc-500", "{product.store_name}" }

            if !product.vibes.is_empty() {
                div { class: "mt-2 flex flex-wrap gap-1",
                    for vibe in product.vibes.iter() {
                        VibeTag { label: vibe.clone() }
                    }
                }
            }
        }
    }
}
