use crate::ui::components::error::ConfigErrorBanner;
use crate::ui::Route;
use dioxus::prelude::*;

/// Shared page chrome around every route
#[component]
pub fn PageLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-zinc-50 text-zinc-900",
            header { class: "border-b border-zinc-200 bg-white px-4 py-3",
                Link {
                    to: Route::Home {},
                    class: "font-semibold tracking-tight text-[#00205B]",
                    "YEG Shadow Inventory"
                }
            }
            ConfigErrorBanner {}
            Outlet::<Route> {}
        }
    }
}
