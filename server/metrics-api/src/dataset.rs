//! Static sample dataset (replace with real platform data later).

use engagement_engine::UserRecord;

/// Sample accounts served by the API. Declaration order matters: it is the
/// tie-break order when relative scores are equal.
pub fn sample_users() -> Vec<UserRecord> {
  vec![
    user("alice", 1200, 340, 80, 20),
    user("bob", 900, 220, 60, 15),
    user("charlie", 1500, 500, 120, 30),
    user("diana", 600, 120, 30, 5),
  ]
}

fn user(username: &str, followers: u64, likes: u64, comments: u64, shares: u64) -> UserRecord {
  UserRecord {
    username: username.to_string(),
    followers,
    likes,
    comments,
    shares,
  }
}
