//! Questions, plus the pagination and filtering rules applied to question
//! listings.
//!
//! A question names its category by the category's `type` string rather than
//! by id, and nothing enforces that the name exists. Two lookups use that name
//! differently:
//!
//! - filtering by category id resolves the category and compares its `type`
//!   to `question.category` exactly;
//! - the free-text `category` filter on the list endpoint compares ignoring
//!   case (see [`matches_category_filter`]).
//!
//! The mismatch is part of the observable contract and is kept as-is.

use serde::{Deserialize, Serialize};

/// Page size for `GET /questions`.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  pub difficulty: i64,
  /// The `type` of the category this question belongs to.
  pub category:   String,
}

/// Input for [`TriviaStore::add_question`](crate::store::TriviaStore::add_question).
/// The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
  pub question:   String,
  pub answer:     String,
  pub difficulty: i64,
  pub category:   String,
}

impl NewQuestion {
  pub fn into_question(self, id: i64) -> Question {
    Question {
      id,
      question: self.question,
      answer: self.answer,
      difficulty: self.difficulty,
      category: self.category,
    }
  }
}

/// Whether `question` passes the free-text category filter.
///
/// An absent or empty filter keeps everything.
pub fn matches_category_filter(question: &Question, filter: Option<&str>) -> bool {
  match filter {
    None | Some("") => true,
    Some(f) => question.category.to_lowercase() == f.to_lowercase(),
  }
}

/// Half-open `[start, end)` bounds of a 1-based page, before clamping.
/// Returns `None` for pages below 1.
pub fn page_bounds(page: i64) -> Option<(usize, usize)> {
  if page < 1 {
    return None;
  }
  let start = usize::try_from(page - 1)
    .ok()?
    .saturating_mul(QUESTIONS_PER_PAGE);
  Some((start, start.saturating_add(QUESTIONS_PER_PAGE)))
}

/// The slice of `items` shown on `page`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
  let Some((start, end)) = page_bounds(page) else {
    return &[];
  };
  let start = start.min(items.len());
  let end = end.min(items.len());
  &items[start..end]
}
