//! Handlers for `/categories` endpoints.

use axum::{
  Json,
  extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;
use trivia_core::{category::Category, question::Question, store::TriviaStore};

use crate::{AppState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
  pub success:    bool,
  pub categories: Vec<Category>,
}

/// `GET /categories`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<CategoriesResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let categories = state
    .store
    .list_categories()
    .await
    .map_err(ApiError::store)?;

  if categories.is_empty() {
    return Err(ApiError::NotFound("no categories".into()));
  }

  Ok(Json(CategoriesResponse { success: true, categories }))
}

// ─── Questions by category ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
  pub success:         bool,
  pub questions:       Vec<Question>,
  pub total_questions: usize,
  pub category:        Category,
}

/// `GET /categories/{category_id}/questions`
///
/// Matches `question.category` against the category's `type` exactly.
pub async fn questions<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Path(category_id) = path?;

  let category = state
    .store
    .get_category(category_id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("category {category_id} not found")))?;

  let questions = state
    .store
    .questions_in_category(&category.kind)
    .await
    .map_err(ApiError::store)?;

  if questions.is_empty() {
    return Err(ApiError::NotFound(format!(
      "no questions in category {:?}",
      category.kind
    )));
  }

  Ok(Json(CategoryQuestionsResponse {
    success: true,
    total_questions: questions.len(),
    questions,
    category,
  }))
}
