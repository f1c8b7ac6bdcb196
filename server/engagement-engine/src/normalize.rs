//! Normalize inbound records into canonical UserRecord models.

use crate::error::EngineError;
use crate::types::{RawUser, UserRecord};

/// Validate and canonicalize a raw batch.
///
/// The first invalid record rejects the whole batch; no partial output.
/// Counts are already coerced at the serde boundary (missing fields are 0,
/// negative or non-numeric values never parse), so only usernames are
/// checked here. Duplicate usernames are allowed.
pub fn normalize_batch(raw: &[RawUser]) -> Result<Vec<UserRecord>, EngineError> {
  raw.iter().map(normalize_record).collect()
}

fn normalize_record(raw: &RawUser) -> Result<UserRecord, EngineError> {
  let username = raw.username.trim();
  if username.is_empty() {
    return Err(EngineError::validation("username", "must not be blank"));
  }
  Ok(UserRecord {
    username: username.to_string(),
    followers: raw.followers,
    likes: raw.likes,
    comments: raw.comments,
    shares: raw.shares,
  })
}
