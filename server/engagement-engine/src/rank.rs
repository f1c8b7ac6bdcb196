//! Relative scoring and rank assignment over a computed batch.

use crate::metrics::{round_to, SCORE_DECIMALS};
use crate::types::UserMetrics;

/// Arithmetic mean of the (already rounded) engagement rates. 0.0 for an
/// empty batch.
pub fn batch_average(rates: &[f64]) -> f64 {
  if rates.is_empty() {
    return 0.0;
  }
  rates.iter().sum::<f64>() / rates.len() as f64
}

/// Score relative to the batch average, rounded to `SCORE_DECIMALS` places.
///
/// `None` when the average is 0: every rate in the batch is 0 and there is
/// no baseline to compare against.
pub fn relative_score(rate: f64, avg_rate: f64) -> Option<f64> {
  if avg_rate == 0.0 {
    return None;
  }
  Some(round_to(rate / avg_rate, SCORE_DECIMALS))
}

/// Sort by relative score descending and assign 1-based ranks in place.
///
/// `None` scores compare as 0.0 but stay `None` in the output. The sort is
/// stable, so ties keep their input order.
pub fn assign_ranks(rows: &mut [UserMetrics]) {
  rows.sort_by(|a, b| {
    let a_score = a.relative_score.unwrap_or(0.0);
    let b_score = b.relative_score.unwrap_or(0.0);
    b_score.total_cmp(&a_score)
  });
  for (idx, row) in rows.iter_mut().enumerate() {
    row.rank = (idx + 1) as u32;
  }
}
