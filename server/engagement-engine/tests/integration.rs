//! Integration tests for the engagement engine.

use engagement_engine::{compute_metrics, normalize_batch, RawUser, UserRecord};

fn fixture_batch() -> Vec<UserRecord> {
  let json = r#"[
    {"username": "alice",   "followers": 1200, "likes": 340, "comments": 80,  "shares": 20},
    {"username": "bob",     "followers": 900,  "likes": 220, "comments": 60,  "shares": 15},
    {"username": "charlie", "followers": 1500, "likes": 500, "comments": 120, "shares": 30},
    {"username": "diana",   "followers": 600,  "likes": 120, "comments": 30,  "shares": 5}
  ]"#;
  let raw: Vec<RawUser> = serde_json::from_str(json).unwrap();
  normalize_batch(&raw).unwrap()
}

#[test]
fn sample_batch_ranks_as_expected() {
  let rows = compute_metrics(&fixture_batch());
  assert_eq!(rows.len(), 4);

  // Output order is rank order, highest relative score first.
  let order: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
  assert_eq!(order, vec!["charlie", "alice", "bob", "diana"]);

  let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
  assert_eq!(ranks, vec![1, 2, 3, 4]);

  let totals: Vec<u64> = rows.iter().map(|r| r.total_engagement).collect();
  assert_eq!(totals, vec![650, 440, 295, 155]);

  let rates: Vec<f64> = rows.iter().map(|r| r.engagement_rate).collect();
  assert_eq!(rates, vec![0.433_333, 0.366_667, 0.327_778, 0.258_333]);

  let scores: Vec<Option<f64>> = rows.iter().map(|r| r.relative_score).collect();
  assert_eq!(
    scores,
    vec![Some(1.251), Some(1.058), Some(0.946), Some(0.745)]
  );
}

#[test]
fn ranks_are_contiguous_with_no_gaps() {
  let mut batch = fixture_batch();
  batch.push(UserRecord {
    username: "quiet".into(),
    followers: 0,
    likes: 0,
    comments: 0,
    shares: 0,
  });
  let rows = compute_metrics(&batch);
  assert_eq!(rows.len(), batch.len());

  let mut ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
  ranks.sort_unstable();
  let expected: Vec<u32> = (1..=batch.len() as u32).collect();
  assert_eq!(ranks, expected);
}

#[test]
fn zero_follower_record_rate_is_zero_and_ranks_last() {
  let mut batch = fixture_batch();
  batch.push(UserRecord {
    username: "ghost".into(),
    followers: 0,
    likes: 50,
    comments: 0,
    shares: 0,
  });
  let rows = compute_metrics(&batch);
  let ghost = rows.iter().find(|r| r.username == "ghost").unwrap();
  assert_eq!(ghost.engagement_rate, 0.0);
  assert_eq!(ghost.rank, 5);
}

#[test]
fn all_zero_rates_give_null_scores() {
  let batch = vec![
    UserRecord {
      username: "a".into(),
      followers: 0,
      likes: 10,
      comments: 0,
      shares: 0,
    },
    UserRecord {
      username: "b".into(),
      followers: 500,
      likes: 0,
      comments: 0,
      shares: 0,
    },
  ];
  let rows = compute_metrics(&batch);
  assert!(rows.iter().all(|r| r.relative_score.is_none()));

  // None survives into the JSON output as null, and input order is kept.
  let json = serde_json::to_string(&rows).unwrap();
  assert!(json.contains("\"relative_score\":null"));
  assert_eq!(rows[0].username, "a");
  assert_eq!(rows[1].username, "b");
}

#[test]
fn empty_batch_is_not_an_error() {
  let rows = compute_metrics(&[]);
  assert!(rows.is_empty());
}

#[test]
fn missing_count_fields_parse_as_zero() {
  let json = r#"[{"username": "sparse", "followers": 100}]"#;
  let raw: Vec<RawUser> = serde_json::from_str(json).unwrap();
  let batch = normalize_batch(&raw).unwrap();
  let rows = compute_metrics(&batch);
  assert_eq!(rows[0].total_engagement, 0);
  assert_eq!(rows[0].engagement_rate, 0.0);
}

#[test]
fn negative_counts_are_rejected_at_the_boundary() {
  let json = r#"[{"username": "bad", "followers": 100, "likes": -3}]"#;
  let parsed = serde_json::from_str::<Vec<RawUser>>(json);
  assert!(parsed.is_err());
}

#[test]
fn blank_username_gives_clear_error() {
  let json = r#"[{"username": "  ", "followers": 100}]"#;
  let raw: Vec<RawUser> = serde_json::from_str(json).unwrap();
  let err = normalize_batch(&raw).unwrap_err();
  assert!(
    err.to_string().contains("username"),
    "Error should mention the field: {}",
    err
  );
}

#[test]
fn deterministic_output_across_runs() {
  let batch = fixture_batch();

  let json1 = serde_json::to_string(&compute_metrics(&batch)).unwrap();
  let json2 = serde_json::to_string(&compute_metrics(&batch)).unwrap();
  assert_eq!(json1, json2, "Same inputs must produce identical JSON output");
}

#[test]
fn tied_scores_keep_dataset_order() {
  // Identical counts => identical rates => tied relative scores.
  let make = |name: &str| UserRecord {
    username: name.into(),
    followers: 100,
    likes: 10,
    comments: 5,
    shares: 5,
  };
  let batch = vec![make("zeta"), make("alpha"), make("mira")];
  let rows = compute_metrics(&batch);
  let order: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
  assert_eq!(order, vec!["zeta", "alpha", "mira"]);
}

#[test]
fn unknown_fields_are_ignored() {
  let json = r#"[{"username": "alice", "followers": 10, "verified": true, "bio": "hi"}]"#;
  let raw: Vec<RawUser> = serde_json::from_str(json).unwrap();
  assert_eq!(raw.len(), 1);
  assert_eq!(raw[0].followers, 10);
}
