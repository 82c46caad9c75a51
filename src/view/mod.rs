//! View State
//!
//! Screen state machines, independent of the rendering layer. Each screen
//! owns its state value; nothing here is shared between screens.
//!
//! - [`dashboard`]: fetch-on-mount category distribution
//! - [`recommendations`]: fetch-on-demand product recommendations
//! - [`inflight`]: one outstanding request per screen, superseded ones aborted

pub mod dashboard;
pub mod error;
pub mod inflight;
pub mod recommendations;

pub use dashboard::{load_dashboard, DashboardData, DashboardState};
pub use error::DisplayError;
pub use inflight::InFlight;
pub use recommendations::{
    search, RecommendationCard, RecommendationState, SearchRequest, SearchTicket, RATING_SUFFIX,
};
