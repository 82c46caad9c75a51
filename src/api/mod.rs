//! Marketplace API
//!
//! Client side of the marketplace analysis service. Views talk to the
//! [`MarketplaceApi`] trait; [`HttpApiClient`] is the production
//! implementation.
//!
//! # Endpoints
//!
//! - `GET /metrics/category_distribution` - items per category
//! - `GET /products/{id}/recommendations` - similar products for one product
//! - `GET /` - liveness probe
//!
//! Every request carries `Authorization: Bearer <token>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use marketplace_dashboard::api::{HttpApiClient, MarketplaceApi};
//! use marketplace_dashboard::config::ApiConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpApiClient::new(&ApiConfig::default());
//! let response = client.get_category_distribution().await?;
//! println!("{} categories", response.distribution.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::HttpApiClient;
pub use error::{TransportError, TransportResult};

use async_trait::async_trait;

use crate::model::{CategoryDistributionResponse, RecommendationResult};

/// Operations the dashboard screens need from the marketplace service.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded `spawn_local` executor.
#[async_trait(?Send)]
pub trait MarketplaceApi {
    /// Items per category, in the order the server lists them
    async fn get_category_distribution(&self) -> TransportResult<CategoryDistributionResponse>;

    /// Recommendations for an opaque, caller-supplied product id
    async fn get_recommendations(&self, product_id: &str) -> TransportResult<RecommendationResult>;
}
