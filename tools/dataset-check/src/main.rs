//! dataset-check: validate a JSON user dataset for the metrics API
//!
//! Usage:
//!   dataset-check <file>       # report problems and a summary
//!   dataset-check <file> -q    # quiet: exit 0 if valid, 1 if not
//!
//! The file must hold a JSON array of user records. Missing counts default
//! to 0; negative or non-numeric counts and blank usernames fail the check.
//! Duplicate usernames are reported but do not fail it.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::process;

use engagement_engine::{normalize_batch, RawUser, UserRecord};

fn load_records(path: &str) -> Vec<RawUser> {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("dataset-check: cannot read {}: {}", path, e);
        process::exit(2);
    });
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("dataset-check: invalid JSON in {}: {}", path, e);
        process::exit(1);
    })
}

fn duplicate_usernames(records: &[UserRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.username.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(name, n)| (name.to_string(), n))
        .collect()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let files: Vec<_> = args.iter().filter(|a| !a.starts_with('-')).skip(1).collect();

    if files.len() != 1 {
        eprintln!("Usage: dataset-check <file> [-q|--quiet]");
        eprintln!("  -q  Quiet: only exit code (0=valid, 1=invalid)");
        process::exit(2);
    }

    let raw = load_records(files[0]);
    let records = match normalize_batch(&raw) {
        Ok(records) => records,
        Err(e) => {
            if !quiet {
                println!("invalid: {}", e);
            }
            process::exit(1);
        }
    };

    if quiet {
        process::exit(0);
    }

    for (name, n) in duplicate_usernames(&records) {
        println!("~ username {:?} appears {} times", name, n);
    }
    println!("{} records ok", records.len());
}
