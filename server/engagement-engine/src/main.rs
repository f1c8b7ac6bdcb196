//! Binary entrypoint: read a JSON array of user records from stdin, write
//! the ranked metrics batch to stdout.
//!
//! Output is `{"data": [...]}` on success (the same shape the HTTP API
//! serves), or a structured error object with exit code 1 when the input
//! is rejected.

use engagement_engine::types::{BatchOutput, ErrorOutput};
use engagement_engine::{compute_metrics, normalize_batch, EngineError, RawUser};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let err = match &e {
      EngineError::Validation { field, reason } => {
        ErrorOutput::new(reason.clone()).with_field(field.clone())
      }
      _ => ErrorOutput::new(e.to_string()),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = serde_json::to_writer(&mut out, &err);
    let _ = writeln!(out);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let records: Vec<RawUser> = serde_json::from_str(&raw)?;
  let batch = normalize_batch(&records)?;

  let out = BatchOutput {
    data: compute_metrics(&batch),
  };
  let stdout = io::stdout();
  let mut w = stdout.lock();
  serde_json::to_writer(&mut w, &out)?;
  writeln!(w)?;
  Ok(())
}
