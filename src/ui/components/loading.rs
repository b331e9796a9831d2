use dioxus::prelude::*;

/// Loading spinner with a caption
#[component]
pub fn Loading(message: String) -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-12",
            div {
                class: "animate-spin rounded-full h-12 w-12 border-b-2 border-[#00205B]"
            }
            p {
                class: "ml-4 text-zinc-600",
                "{message}"
            }
        }
    }
}
