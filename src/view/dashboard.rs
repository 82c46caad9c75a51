//! Dashboard state
//!
//! `Loading` on mount, then exactly one transition to `Loaded` or `Error`.
//! Both outcomes are final until the screen is mounted again.

use crate::api::{MarketplaceApi, TransportResult};
use crate::format::{prepare_chart_data, summarize};
use crate::model::{CategoryDistributionResponse, ChartDatum, DistributionSummary};

use super::error::DisplayError;

/// Chart rows and totals for a loaded dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub chart: Vec<ChartDatum>,
    pub summary: DistributionSummary,
}

impl DashboardData {
    pub fn from_response(response: &CategoryDistributionResponse) -> Self {
        let chart = prepare_chart_data(&response.distribution);
        let summary = summarize(&chart);
        Self { chart, summary }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Error(DisplayError),
    Loaded(DashboardData),
}

impl DashboardState {
    /// Settle a fetch outcome. Transport details are dropped here.
    pub fn from_result(result: TransportResult<CategoryDistributionResponse>) -> Self {
        match result {
            Ok(response) => {
                let data = DashboardData::from_response(&response);
                tracing::debug!(
                    categories = data.summary.category_count,
                    total = data.summary.total_items,
                    "Category distribution loaded"
                );
                DashboardState::Loaded(data)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dashboard metrics unavailable");
                DashboardState::Error(DisplayError::MetricsUnavailable)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn error(&self) -> Option<DisplayError> {
        match self {
            DashboardState::Error(e) => Some(*e),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Fetch the distribution and settle the dashboard state
pub async fn load_dashboard<A>(api: &A) -> DashboardState
where
    A: MarketplaceApi + ?Sized,
{
    DashboardState::from_result(api.get_category_distribution().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::model::{CategoryDistribution, RecommendationResult};
    use async_trait::async_trait;

    struct StubApi {
        distribution: Option<CategoryDistribution>,
    }

    #[async_trait(?Send)]
    impl MarketplaceApi for StubApi {
        async fn get_category_distribution(
            &self,
        ) -> TransportResult<CategoryDistributionResponse> {
            match &self.distribution {
                Some(distribution) => Ok(CategoryDistributionResponse {
                    distribution: distribution.clone(),
                    total_products: None,
                }),
                None => Err(TransportError::Status {
                    url: "http://stub/metrics/category_distribution".to_string(),
                    status: 500,
                }),
            }
        }

        async fn get_recommendations(&self, _: &str) -> TransportResult<RecommendationResult> {
            unreachable!("dashboard never requests recommendations")
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DashboardState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_successful_fetch_builds_summary() {
        let api = StubApi {
            distribution: Some([("Books", 3), ("Toys", 5)].into_iter().collect()),
        };

        let state = load_dashboard(&api).await;
        let data = state.data().expect("dashboard should be loaded");

        assert_eq!(data.summary.category_count, 2);
        assert_eq!(data.summary.total_items, 8);
        assert_eq!(data.chart[0].name, "Books");
        assert_eq!(data.chart[1].value, 5);
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_error_without_chart() {
        let api = StubApi { distribution: None };

        let state = load_dashboard(&api).await;

        assert_eq!(state, DashboardState::Error(DisplayError::MetricsUnavailable));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_empty_distribution_loads_empty_chart() {
        let api = StubApi {
            distribution: Some(CategoryDistribution::new()),
        };

        let state = load_dashboard(&api).await;
        let data = state.data().unwrap();

        assert!(data.chart.is_empty());
        assert_eq!(data.summary, DistributionSummary::default());
    }
}
