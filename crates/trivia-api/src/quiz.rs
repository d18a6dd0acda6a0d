//! Handler for `POST /play_quiz`.
//!
//! Body:
//!
//! ```json
//! { "quiz_category": {"id": 1, "type": "Science"}, "previous_questions": [3, 7] }
//! ```
//!
//! `category` is accepted in place of `quiz_category`. Both keys must be
//! present; the category may be `null`, and an empty `type` means all
//! categories. `previous_questions` may hold bare ids or question objects.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use trivia_core::{
  question::Question,
  quiz::pick_question,
  store::TriviaStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  #[serde(rename = "type", default)]
  pub kind: Option<String>,
}

/// An already-shown question, either as its id or as the question object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PreviousQuestion {
  Id(i64),
  Question { id: i64 },
}

impl PreviousQuestion {
  pub fn id(&self) -> i64 {
    match self {
      PreviousQuestion::Id(id) | PreviousQuestion::Question { id } => *id,
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct PlayBody {
  // `deserialize_with` makes the key required even though `null` is allowed.
  #[serde(alias = "quiz_category", deserialize_with = "Option::deserialize")]
  pub category:           Option<QuizCategory>,
  pub previous_questions: Vec<PreviousQuestion>,
}

impl PlayBody {
  fn category_type(&self) -> Option<&str> {
    self
      .category
      .as_ref()
      .and_then(|c| c.kind.as_deref())
      .filter(|k| !k.is_empty())
  }
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
  pub success:  bool,
  /// `null` once every candidate has been shown.
  pub question: Option<Question>,
}

/// `POST /play_quiz`
pub async fn play<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<PlayBody>, JsonRejection>,
) -> Result<Json<PlayResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(body) = payload?;

  let seen: Vec<i64> = body.previous_questions.iter().map(PreviousQuestion::id).collect();
  let candidates = state
    .store
    .quiz_candidates(body.category_type(), &seen)
    .await
    .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

  let question = pick_question(candidates, &*state.rng);
  if question.is_none() {
    tracing::debug!(seen = seen.len(), "quiz round exhausted");
  }

  Ok(Json(PlayResponse { success: true, question }))
}
