#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;
use crate::ui::search_params::SearchParams;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageLayout)]
    #[route("/")]
    Home {},
    #[route("/search?:..params")]
    SearchPage { params: SearchParams },
    #[route("/product/:..segments")]
    ProductDetails { segments: Vec<String> },
}

/// Detail page route for a product id. Ids may contain `/`, so the id is
/// carried as the trailing path segments.
pub fn product_route(id: &str) -> Route {
    Route::ProductDetails {
        segments: id.split('/').map(str::to_string).collect(),
    }
}

/// Product id carried by the trailing segments of a detail route
pub fn product_id(segments: &[String]) -> String {
    segments.join("/")
}

#[cfg(feature = "desktop")]
pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("YEG Shadow Inventory")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
