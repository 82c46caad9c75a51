//! HTTP API Client
//!
//! `reqwest` implementation of [`MarketplaceApi`]. Works natively and in the
//! browser (where `reqwest` goes through `fetch`).

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::{TransportError, TransportResult};
use super::MarketplaceApi;
use crate::config::ApiConfig;
use crate::model::{CategoryDistributionResponse, RecommendationResult};

/// Marketplace API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    token: String,
    recommendation_limit: Option<u32>,
}

impl HttpApiClient {
    /// Create a client with transport defaults (no timeout, no retry)
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            recommendation_limit: config.recommendation_limit,
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn distribution_url(&self) -> String {
        format!("{}/metrics/category_distribution", self.base_url)
    }

    fn recommendations_url(&self, product_id: &str) -> String {
        let mut url = format!(
            "{}/products/{}/recommendations",
            self.base_url,
            urlencoding::encode(product_id)
        );
        if let Some(limit) = self.recommendation_limit {
            url.push_str(&format!("?n_recommendations={}", limit));
        }
        url
    }

    /// `.` and `..` are dot segments to URL parsers even when percent-encoded
    fn check_product_id(&self, product_id: &str) -> TransportResult<()> {
        if matches!(product_id, "." | "..") {
            return Err(TransportError::InvalidProductId {
                url: self.recommendations_url(product_id),
                product_id: product_id.to_string(),
            });
        }
        Ok(())
    }

    /// Check whether the API answers its liveness endpoint
    pub async fn ping(&self) -> bool {
        let url = format!("{}/", self.base_url);

        match self.client.get(&url).bearer_auth(&self.token).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "API liveness check failed");
                false
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> TransportResult<T> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|e| TransportError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for HttpApiClient {
    async fn get_category_distribution(&self) -> TransportResult<CategoryDistributionResponse> {
        let url = self.distribution_url();

        self.get_json(&url).await.map_err(|err| {
            tracing::error!(url = %url, error = %err, "Error fetching category distribution");
            err
        })
    }

    async fn get_recommendations(&self, product_id: &str) -> TransportResult<RecommendationResult> {
        let url = self.recommendations_url(product_id);

        let result = match self.check_product_id(product_id) {
            Ok(()) => self.get_json(&url).await,
            Err(e) => Err(e),
        };

        result.map_err(|err| {
            tracing::error!(
                url = %url,
                product_id = %product_id,
                error = %err,
                "Error fetching recommendations"
            );
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str, limit: Option<u32>) -> HttpApiClient {
        HttpApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            recommendation_limit: limit,
            ..ApiConfig::default()
        })
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = client_for("http://localhost:8000/", None);
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.distribution_url(),
            "http://localhost:8000/metrics/category_distribution"
        );
    }

    #[test]
    fn test_recommendations_url_encodes_single_segment() {
        let client = client_for("http://localhost:8000", None);
        assert_eq!(
            client.recommendations_url("42"),
            "http://localhost:8000/products/42/recommendations"
        );
        assert_eq!(
            client.recommendations_url("a b/c"),
            "http://localhost:8000/products/a%20b%2Fc/recommendations"
        );
        assert_eq!(
            client.recommendations_url("v1.2"),
            "http://localhost:8000/products/v1.2/recommendations"
        );
    }

    #[test]
    fn test_dot_segment_ids_are_rejected() {
        let client = client_for("http://localhost:8000", None);

        assert!(client.check_product_id("...").is_ok());
        assert!(client.check_product_id("42").is_ok());
        for id in [".", ".."] {
            let err = client.check_product_id(id).unwrap_err();
            assert!(matches!(err, TransportError::InvalidProductId { .. }));
            assert!(err.url().starts_with("http://localhost:8000/products/"));
        }
    }

    #[test]
    fn test_recommendations_url_with_limit() {
        let client = client_for("http://api.local", Some(10));
        assert_eq!(
            client.recommendations_url("7"),
            "http://api.local/products/7/recommendations?n_recommendations=10"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let http = Client::builder().no_proxy().build().unwrap();
        let client = HttpApiClient::with_client(
            http,
            &ApiConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                ..ApiConfig::default()
            },
        );

        let err = client.get_category_distribution().await.unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }));
        assert!(!client.ping().await);
    }
}
