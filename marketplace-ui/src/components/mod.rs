//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod product_card;
pub mod summary_card;

pub use chart::BarChart;
pub use loading::{ErrorBanner, InlineLoading, Loading};
pub use nav::Nav;
pub use product_card::{RecommendationItem, SelectedProduct};
pub use summary_card::SummaryCard;
