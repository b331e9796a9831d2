use crate::api::ApiHandle;
use crate::ui::api_context::{load_api, ApiContextProvider};
use crate::ui::{Route, MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let api: ApiHandle = use_hook(load_api);

    rsx! {
        document::Title { "YEG Shadow Inventory" }
        document::Meta { name: "description", content: "Search local Edmonton inventory in one place." }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ApiContextProvider { api,
            Router::<Route> {}
        }
    }
}
