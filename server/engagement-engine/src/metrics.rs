//! Per-record arithmetic: engagement totals and follower-normalized rates.

use crate::types::UserRecord;

/// Decimal places kept on `engagement_rate`.
pub const RATE_DECIMALS: u32 = 6;
/// Decimal places kept on `relative_score`.
pub const SCORE_DECIMALS: u32 = 3;

/// Round to `places` decimal places. Uses `f64::round`, so halfway cases go
/// away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
  let factor = 10f64.powi(places as i32);
  (value * factor).round() / factor
}

/// Sum of likes, comments, and shares.
pub fn total_engagement(record: &UserRecord) -> u64 {
  record.likes + record.comments + record.shares
}

/// Engagement per follower, rounded to `RATE_DECIMALS` places.
///
/// Exactly 0.0 when the account has no followers, regardless of counts.
pub fn engagement_rate(record: &UserRecord) -> f64 {
  if record.followers == 0 {
    return 0.0;
  }
  let rate = total_engagement(record) as f64 / record.followers as f64;
  round_to(rate, RATE_DECIMALS)
}
