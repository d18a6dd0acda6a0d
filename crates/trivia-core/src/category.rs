//! Category — a named bucket of questions.
//!
//! Categories are created administratively and are read-only over HTTP.

use serde::{Deserialize, Serialize};

/// The default categories inserted by `trivia-server --seed`.
pub const DEFAULT_CATEGORIES: [&str; 6] =
  ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  /// Display name, e.g. `"Science"`. Questions refer to a category by this
  /// value, not by `id`.
  #[serde(rename = "type")]
  pub kind: String,
}
