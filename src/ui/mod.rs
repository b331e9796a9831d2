pub mod api_context;
pub mod app;
pub mod components;
pub mod load_state;
pub mod search_params;

pub use api_context::*;
pub use app::*;
pub use components::*;
pub use load_state::LoadState;
pub use search_params::{search_href, SearchParams};
