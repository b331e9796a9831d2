// Library exports for integration tests and reusable components

pub mod api;
pub mod config;
pub mod ui;

pub use api::{ProductSummary, SearchClient, SearchError};
pub use config::{Config, ConfigError};
