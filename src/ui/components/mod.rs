pub mod app;
pub mod error;
pub mod home;
pub mod layout;
pub mod loading;
pub mod product_card;
pub mod product_detail;
pub mod product_grid;
pub mod search_bar;
pub mod search_page;
pub mod vibe_tag;

pub use app::App;
pub use error::{ConfigErrorBanner, ErrorBanner};
pub use home::Home;
pub use layout::PageLayout;
pub use loading::Loading;
pub use product_card::ProductCard;
pub use product_detail::ProductDetails;
pub use product_grid::{ProductGrid, EMPTY_INVENTORY_MESSAGE};
pub use search_bar::SearchBar;
pub use search_page::SearchPage;
pub use vibe_tag::VibeTag;
