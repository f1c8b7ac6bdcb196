//! Engagement metrics engine — deterministic, pure computation.
//!
//! Derives per-record engagement totals, follower-normalized rates,
//! batch-relative scores, and a 1-based rank ordering for a batch of
//! social-media user records.
//!
//! No DB, no network, no hidden state; the same input batch always produces
//! the same output. The HTTP layer lives in metrics-api.

pub mod error;
pub mod metrics;
pub mod normalize;
pub mod rank;
pub mod types;

pub use error::EngineError;
pub use normalize::normalize_batch;
pub use types::{RawUser, UserMetrics, UserRecord};

/// Compute the full ranked metrics batch for `records`.
///
/// Pure function of the input: builds fresh output rows, never mutates the
/// caller's records, and returns rows in rank order (rank 1 first). Never
/// fails — division-by-zero cases are explicit branches, not errors.
pub fn compute_metrics(records: &[UserRecord]) -> Vec<UserMetrics> {
  // Per-record totals and rates; scores and ranks are filled in below.
  let mut rows: Vec<UserMetrics> = records
    .iter()
    .map(|r| UserMetrics {
      username: r.username.clone(),
      followers: r.followers,
      likes: r.likes,
      comments: r.comments,
      shares: r.shares,
      total_engagement: metrics::total_engagement(r),
      engagement_rate: metrics::engagement_rate(r),
      relative_score: None,
      rank: 0,
    })
    .collect();

  let rates: Vec<f64> = rows.iter().map(|r| r.engagement_rate).collect();
  let avg_rate = rank::batch_average(&rates);
  for row in &mut rows {
    row.relative_score = rank::relative_score(row.engagement_rate, avg_rate);
  }

  rank::assign_ranks(&mut rows);
  rows
}
