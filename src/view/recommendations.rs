//! Recommendation search state
//!
//! Driven by explicit searches. Every search gets a ticket; only the
//! resolution carrying the latest ticket is applied, so a slow response to an
//! earlier search can never overwrite a newer one.

use crate::api::{MarketplaceApi, TransportResult};
use crate::format::{format_count, format_percentage, format_price, NumberLocale};
use crate::model::{RecommendationResult, RecommendedProduct};

use super::error::DisplayError;

/// Appended to every rating
pub const RATING_SUFFIX: &str = " ⭐";

/// Identifies one search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// A search ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub product_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationState {
    query: String,
    loading: bool,
    error: Option<DisplayError>,
    result: Option<RecommendationResult>,
    latest_ticket: u64,
}

impl RecommendationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the product id input
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for the current input.
    ///
    /// Clears the previous error and marks the screen as loading. Earlier
    /// results stay visible until this search settles. Blank input is sent
    /// like any other id and settles through the failure path.
    pub fn begin_search(&mut self) -> SearchRequest {
        self.latest_ticket += 1;
        self.error = None;
        self.loading = true;

        SearchRequest {
            ticket: SearchTicket(self.latest_ticket),
            product_id: self.query.clone(),
        }
    }

    /// Apply a search outcome. Returns `false` when the ticket is stale.
    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        outcome: TransportResult<RecommendationResult>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "Discarding superseded search result"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                tracing::debug!(
                    product = %result.title,
                    count = result.recommendations.len(),
                    "Recommendations loaded"
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation search failed");
                self.result = None;
                self.error = Some(DisplayError::RecommendationsUnavailable);
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<DisplayError> {
        self.error
    }

    /// Queried product, for the "selected product" panel
    pub fn selected_product(&self) -> Option<&RecommendationResult> {
        self.result.as_ref()
    }

    pub fn recommendations(&self) -> &[RecommendedProduct] {
        self.result
            .as_ref()
            .map(|result| result.recommendations.as_slice())
            .unwrap_or(&[])
    }
}

/// Run one search to completion against `api`
pub async fn search<A>(state: &mut RecommendationState, api: &A) -> bool
where
    A: MarketplaceApi + ?Sized,
{
    let request = state.begin_search();
    let outcome = api.get_recommendations(&request.product_id).await;
    state.resolve(request.ticket, outcome)
}

/// Display strings for one recommended product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub product_id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub similarity: String,
}

impl RecommendationCard {
    pub fn new(product: &RecommendedProduct, locale: NumberLocale) -> Self {
        Self {
            product_id: product.product_id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            rating: format!("{:.1}{}", product.rating, RATING_SUFFIX),
            reviews: format_count(product.reviews_count, locale),
            similarity: format_percentage(product.similarity_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::model::{CategoryDistributionResponse, ProductId};
    use async_trait::async_trait;

    fn sample_result(title: &str) -> RecommendationResult {
        RecommendationResult {
            product_id: Some(ProductId::new("1")),
            title: title.to_string(),
            category: "Electronics".to_string(),
            recommendations: vec![RecommendedProduct {
                product_id: ProductId::new("7"),
                title: "Mechanical Keyboard".to_string(),
                category: "Electronics".to_string(),
                price: 89.5,
                rating: 4.5,
                reviews_count: 1520,
                similarity_score: 0.8731,
            }],
        }
    }

    /// Knows product "1"; anything else is a 404
    struct CatalogApi;

    #[async_trait(?Send)]
    impl MarketplaceApi for CatalogApi {
        async fn get_category_distribution(
            &self,
        ) -> TransportResult<CategoryDistributionResponse> {
            unreachable!("search never requests the distribution")
        }

        async fn get_recommendations(
            &self,
            product_id: &str,
        ) -> TransportResult<RecommendationResult> {
            if product_id == "1" {
                Ok(sample_result("Wireless Mouse"))
            } else {
                Err(TransportError::Status {
                    url: format!("http://stub/products/{}/recommendations", product_id),
                    status: 404,
                })
            }
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = RecommendationState::new();
        assert_eq!(state.query(), "");
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.selected_product().is_none());
        assert!(state.recommendations().is_empty());
    }

    #[tokio::test]
    async fn test_valid_search_populates_panel_and_list() {
        let mut state = RecommendationState::new();
        state.set_query("1");

        assert!(search(&mut state, &CatalogApi).await);

        let selected = state.selected_product().unwrap();
        assert_eq!(selected.title, "Wireless Mouse");
        assert_eq!(selected.category, "Electronics");
        assert_eq!(state.recommendations().len(), 1);
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_failed_search_clears_previous_results() {
        let mut state = RecommendationState::new();
        state.set_query("1");
        search(&mut state, &CatalogApi).await;

        state.set_query("999");
        search(&mut state, &CatalogApi).await;

        assert_eq!(state.error(), Some(DisplayError::RecommendationsUnavailable));
        assert!(state.selected_product().is_none());
        assert!(state.recommendations().is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let mut state = RecommendationState::new();
        state.set_query("999");
        search(&mut state, &CatalogApi).await;
        assert!(state.error().is_some());

        state.set_query("1");
        let request = state.begin_search();
        assert!(state.error().is_none());
        assert!(state.is_loading());

        state.resolve(request.ticket, CatalogApi.get_recommendations("1").await);
        assert!(state.error().is_none());
        assert_eq!(state.recommendations().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_search_is_idempotent() {
        let mut state = RecommendationState::new();
        state.set_query("1");

        search(&mut state, &CatalogApi).await;
        let first = (state.selected_product().cloned(), state.error());

        search(&mut state, &CatalogApi).await;
        let second = (state.selected_product().cloned(), state.error());

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_blank_query_fails_like_unknown_product() {
        let mut state = RecommendationState::new();
        state.set_query("999");
        search(&mut state, &CatalogApi).await;
        assert!(state.error().is_some());

        state.set_query("");
        let request = state.begin_search();
        assert_eq!(request.product_id, "");
        assert!(state.error().is_none());
        assert!(state.is_loading());

        let outcome = CatalogApi.get_recommendations(&request.product_id).await;
        assert!(state.resolve(request.ticket, outcome));
        assert_eq!(state.error(), Some(DisplayError::RecommendationsUnavailable));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_blank_query_clears_previous_results() {
        let mut state = RecommendationState::new();
        state.set_query("1");
        search(&mut state, &CatalogApi).await;
        assert!(state.selected_product().is_some());

        state.set_query("   ");
        assert!(search(&mut state, &CatalogApi).await);

        assert_eq!(state.error(), Some(DisplayError::RecommendationsUnavailable));
        assert!(state.selected_product().is_none());
        assert!(state.recommendations().is_empty());
    }

    #[test]
    fn test_query_is_sent_verbatim() {
        let mut state = RecommendationState::new();
        state.set_query(" 42 ");
        assert_eq!(state.begin_search().product_id, " 42 ");
    }

    #[test]
    fn test_stale_resolution_is_ignored() {
        let mut state = RecommendationState::new();
        state.set_query("1");
        let slow = state.begin_search();

        state.set_query("2");
        let fast = state.begin_search();

        assert!(state.resolve(fast.ticket, Ok(sample_result("Second"))));
        assert!(!state.resolve(
            slow.ticket,
            Err(TransportError::Status {
                url: "http://stub/products/1/recommendations".to_string(),
                status: 500,
            })
        ));

        assert_eq!(state.selected_product().unwrap().title, "Second");
        assert!(state.error().is_none());
    }

    #[test]
    fn test_loading_keeps_previous_results_visible() {
        let mut state = RecommendationState::new();
        state.set_query("1");
        let request = state.begin_search();
        state.resolve(request.ticket, Ok(sample_result("Wireless Mouse")));

        state.begin_search();
        assert!(state.is_loading());
        assert!(state.selected_product().is_some());
    }

    #[test]
    fn test_recommendation_card_formatting() {
        let result = sample_result("Wireless Mouse");
        let card = RecommendationCard::new(&result.recommendations[0], NumberLocale::EN_US);

        assert_eq!(card.product_id, "7");
        assert_eq!(card.price, "$89.50");
        assert_eq!(card.rating, "4.5 ⭐");
        assert_eq!(card.reviews, "1,520");
        assert_eq!(card.similarity, "87.3%");
    }
}
