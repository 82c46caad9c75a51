//! # Marketplace Dashboard
//!
//! Core of the marketplace analytics dashboard: the API client, the screen
//! state machines and the formatting that turns API payloads into what the
//! screens display. The `marketplace-ui` crate renders these in the browser.
//!
//! ## Modules
//!
//! - [`api`]: `MarketplaceApi` trait and its `reqwest` implementation
//! - [`model`]: payload types (category distribution, recommendations)
//! - [`format`]: number, percentage and chart-data helpers
//! - [`view`]: dashboard and recommendation screen state, request cancellation
//! - [`chart`]: bar chart axis and bar geometry
//! - [`route`]: navigable paths
//! - [`config`]: API endpoint, credential, locale and log level
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marketplace_dashboard::api::HttpApiClient;
//! use marketplace_dashboard::config::Config;
//! use marketplace_dashboard::view::{load_dashboard, DashboardState};
//!
//! # async fn run() {
//! let config = Config::from_env();
//! let client = HttpApiClient::new(&config.api);
//!
//! match load_dashboard(&client).await {
//!     DashboardState::Loaded(data) => {
//!         println!(
//!             "{} categories, {} products",
//!             data.summary.category_count, data.summary.total_items
//!         );
//!     }
//!     DashboardState::Error(e) => eprintln!("{}", e),
//!     DashboardState::Loading => unreachable!(),
//! }
//! # }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod format;
pub mod model;
pub mod route;
pub mod view;

// Re-export top-level types for convenience
pub use api::{HttpApiClient, MarketplaceApi, TransportError, TransportResult};

pub use config::{ApiConfig, Config, ConfigError, DisplayConfig, LoggingConfig};

pub use format::{
    format_count, format_number, format_percentage, format_price, prepare_chart_data, summarize,
    NumberLocale,
};

pub use model::{
    CategoryDistribution, CategoryDistributionResponse, ChartDatum, DistributionSummary,
    ProductId, RecommendationResult, RecommendedProduct,
};

pub use route::Route;

pub use view::{
    load_dashboard, search, DashboardData, DashboardState, DisplayError, InFlight,
    RecommendationCard, RecommendationState,
};
