//! Handlers for `/questions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/questions` | `?page=<n>` (default 1), `?category=<type>` |
//! | `POST`   | `/questions` | Body: [`NewQuestion`]; returns 201 |
//! | `DELETE` | `/questions/{id}` | 404 if absent, 422 if the delete fails |
//! | `GET`    | `/questions/search` | `?query=<term>` |
//! | `POST`   | `/questions/search` | Body: `{"query":"<term>"}` |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use trivia_core::{
  question::{NewQuestion, Question, matches_category_filter, paginate},
  store::TriviaStore,
};

use crate::{AppState, error::ApiError};

// ─── Query strings ────────────────────────────────────────────────────────────

/// Raw `key=value` pairs in request order. Repeated keys are allowed.
type QueryPairs = Vec<(String, String)>;

/// The first value given for `key`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
  pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ListParams {
  /// 1-based page number. Anything that is not an integer means page 1.
  pub page:     Option<String>,
  /// Case-insensitive category `type` filter.
  pub category: Option<String>,
}

impl ListParams {
  fn from_pairs(pairs: &[(String, String)]) -> Self {
    Self {
      page:     first_value(pairs, "page"),
      category: first_value(pairs, "category"),
    }
  }

  fn page(&self) -> i64 {
    self
      .page
      .as_deref()
      .and_then(|p| p.trim().parse().ok())
      .unwrap_or(1)
  }
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub success:          bool,
  pub questions:        Vec<Question>,
  /// Size of the filtered set before pagination.
  pub total_questions:  usize,
  pub current_category: Option<String>,
  pub categories:       Vec<String>,
}

/// `GET /questions[?page=<n>][&category=<type>]`
///
/// 404 only when the store holds no questions at all. A page past the end of
/// the (filtered) set is an empty 200.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<ListResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Query(pairs) = query?;
  let params = ListParams::from_pairs(&pairs);

  let questions = state
    .store
    .list_questions()
    .await
    .map_err(ApiError::store)?;
  let categories = state
    .store
    .list_categories()
    .await
    .map_err(ApiError::store)?;

  if questions.is_empty() {
    return Err(ApiError::NotFound("no questions".into()));
  }

  let page = params.page();
  let filtered: Vec<Question> = questions
    .into_iter()
    .filter(|q| matches_category_filter(q, params.category.as_deref()))
    .collect();

  Ok(Json(ListResponse {
    success:          true,
    questions:        paginate(&filtered, page).to_vec(),
    total_questions:  filtered.len(),
    current_category: params.category,
    categories:       categories.into_iter().map(|c| c.kind).collect(),
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreateResponse {
  pub success:  bool,
  pub question: Question,
}

/// `POST /questions` — returns 201 + the stored question.
///
/// All four fields are required and strictly typed; anything else is a 422.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(input) = payload?;

  let question = state.store.add_question(input).await.map_err(|e| {
    tracing::warn!(error = %e, "failed to insert question");
    ApiError::Unprocessable(e.to_string())
  })?;

  tracing::debug!(id = question.id, "question created");
  Ok((
    StatusCode::CREATED,
    Json(CreateResponse { success: true, question }),
  ))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub success: bool,
  pub deleted: i64,
}

/// `DELETE /questions/{id}`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Path(id) = path?;

  state
    .store
    .get_question(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("question {id} not found")))?;

  state.store.delete_question(id).await.map_err(|e| {
    tracing::warn!(id, error = %e, "failed to delete question");
    ApiError::Unprocessable(e.to_string())
  })?;

  tracing::debug!(id, "question deleted");
  Ok(Json(DeleteResponse { success: true, deleted: id }))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  #[serde(alias = "searchTerm")]
  pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
  pub success:      bool,
  pub questions:    Vec<Question>,
  pub total_result: usize,
}

/// `GET /questions/search?query=<term>`
pub async fn search_query<S>(
  State(state): State<AppState<S>>,
  query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Query(pairs) = query?;
  let term = first_value(&pairs, "query")
    .ok_or_else(|| ApiError::Unprocessable("missing search term".into()))?;
  search(&state, &term).await
}

/// `POST /questions/search` — body: `{"query":"<term>"}`
pub async fn search_body<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(body) = payload?;
  search(&state, &body.query).await
}

async fn search<S>(
  state: &AppState<S>,
  term: &str,
) -> Result<Json<SearchResponse>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let questions = state
    .store
    .search_questions(term)
    .await
    .map_err(ApiError::store)?;

  if questions.is_empty() {
    return Err(ApiError::NotFound(format!("no questions match {term:?}")));
  }

  Ok(Json(SearchResponse {
    success:      true,
    total_result: questions.len(),
    questions,
  }))
}
