use crate::api::ProductSummary;
use crate::ui::components::product_card::ProductCard;
use dioxus::prelude::*;
use std::collections::HashSet;
use tracing::warn;

pub const EMPTY_INVENTORY_MESSAGE: &str = "No products yet. Run crawlers to populate inventory.";

/// Responsive grid of product cards, or the empty-inventory message
#[component]
pub fn ProductGrid(
    products: Vec<ProductSummary>,
    on_select: Option<EventHandler<String>>,
) -> Element {
    if products.is_empty() {
        return rsx! {
            p { class: "text-zinc-500", "{EMPTY_INVENTORY_MESSAGE}" }
        };
    }

    // Cards are keyed by id, so only the first product with a given id is shown
    let mut seen = HashSet::new();
    let products: Vec<ProductSummary> = products
        .into_iter()
        .filter(|p| {
            let first = seen.insert(p.id.clone());
            if !first {
                warn!("Skipping product with duplicate id {}", p.id);
            }
            first
        })
        .collect();

    rsx! {
        section { class: "grid grid-cols-2 gap-4 md:grid-cols-3 xl:grid-cols-4",
            for product in products {
                ProductCard {
                    key: "{product.id}",
                    product: product.clone(),
                    on_select,
                }
            }
        }
    }
}
