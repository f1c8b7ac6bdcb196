//! Core types for the engagement engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound type (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One raw user record. Missing counts default to 0; negative or non-numeric
/// counts fail deserialization. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
  pub username: String,
  #[serde(default)]
  pub followers: u64,
  #[serde(default)]
  pub likes: u64,
  #[serde(default)]
  pub comments: u64,
  #[serde(default)]
  pub shares: u64,
}

// ---------------------------------------------------------------------------
// Internal canonical record
// ---------------------------------------------------------------------------

/// Canonical record after boundary validation (username trimmed, non-blank).
#[derive(Debug, Clone)]
pub struct UserRecord {
  pub username: String,
  pub followers: u64,
  pub likes: u64,
  pub comments: u64,
  pub shares: u64,
}

// ---------------------------------------------------------------------------
// Outbound type (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One computed row: input counts echoed plus the derived metrics.
///
/// `relative_score` serializes as a JSON number, or null when the batch
/// average rate is 0 (no meaningful baseline to compare against).
#[derive(Debug, Clone, Serialize)]
pub struct UserMetrics {
  pub username: String,
  pub followers: u64,
  pub likes: u64,
  pub comments: u64,
  pub shares: u64,
  pub total_engagement: u64,
  pub engagement_rate: f64,
  pub relative_score: Option<f64>,
  pub rank: u32,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Batch envelope written to stdout by the binary (same shape the HTTP API
/// serves).
#[derive(Debug, Serialize)]
pub struct BatchOutput {
  pub data: Vec<UserMetrics>,
}

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
