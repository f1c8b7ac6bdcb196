//! Engagement Metrics API
//!
//! HTTP service that recomputes ranked engagement metrics from the static
//! sample dataset on every request and serves the dashboard frontend.

mod dataset;
mod handlers;
mod state;

pub use dataset::sample_users;
pub use handlers::{health, metrics};
pub use state::AppState;
