use crate::api::{ApiHandle, SearchClient};
use crate::config::Config;
use dioxus::prelude::*;
use tracing::{error, info, warn};

/// Build the API handle from the process configuration.
///
/// Called once at startup; a configuration error is kept so every page can
/// report it instead of issuing requests.
pub fn load_api() -> ApiHandle {
    let api = Config::load().map(SearchClient::new);
    if let Err(e) = &api {
        error!("Search API unavailable: {}", e);
    }
    api
}

/// Context provider for the search API handle
#[component]
pub fn ApiContextProvider(api: ApiHandle, children: Element) -> Element {
    let api = use_context_provider(|| api);

    // Startup health check, native builds only
    #[cfg(not(target_arch = "wasm32"))]
    {
        use_hook(|| {
            if let Ok(client) = api {
                spawn(async move {
                    match client.health().await {
                        Ok(()) => info!("Search API at {} is healthy", client.base_url()),
                        Err(e) => warn!("Search API at {} is not healthy: {}", client.base_url(), e),
                    }
                });
            }
        });
    }

    rsx! {
        {children}
    }
}

/// Hook to access the search API handle from components
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}
