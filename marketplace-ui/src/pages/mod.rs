//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod recommendations;

pub use dashboard::Dashboard;
pub use recommendations::Recommendations;
