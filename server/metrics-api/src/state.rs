//! Process-wide state shared across requests.

use engagement_engine::UserRecord;

/// Read-only application state: the source dataset, built once at startup
/// and never mutated. Every request computes from it into fresh rows, so
/// concurrent requests cannot observe each other's partial results.
pub struct AppState {
  pub dataset: Vec<UserRecord>,
}
