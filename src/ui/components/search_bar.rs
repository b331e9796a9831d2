use crate::ui::search_params::search_href;
use dioxus::prelude::*;
use tracing::debug;

/// Search input that navigates to the results page on submit.
///
/// Every submission navigates, including an empty query.
#[component]
pub fn SearchBar(#[props(default)] initial_query: String) -> Element {
    let mut query = use_signal(|| initial_query);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let href = search_href(&query.read());
        debug!("Navigating to {}", href);
        navigator().push(href);
    };

    rsx! {
        form { class: "flex w-full max-w-2xl gap-2", onsubmit: submit,
            input {
                r#type: "search",
                name: "q",
                class: "w-full rounded-xl border border-zinc-300 bg-white px-4 py-3",
                placeholder: "Find local honey...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            button {
                r#type: "submit",
                class: "rounded-xl bg-[#00205B] px-4 py-3 font-medium text-white",
                "Search"
            }
        }
    }
}
