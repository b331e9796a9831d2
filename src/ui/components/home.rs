use crate::ui::components::search_bar::SearchBar;
use dioxus::prelude::*;

/// Landing page
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "mx-auto flex min-h-screen max-w-5xl flex-col items-center justify-center gap-8 px-4",
            h1 { class: "text-center text-4xl font-semibold tracking-tight",
                "Find what Edmonton has in stock"
            }
            SearchBar {}
        }
    }
}
