use dioxus::prelude::*;

#[component]
pub fn VibeTag(label: String) -> Element {
    rsx! {
        span { class: "rounded-full bg-zinc-100 px-2 py-1 text-xs", "{label}" }
    }
}
