//! JSON REST API for the trivia question bank.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_core::store::TriviaStore`].
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/categories` | 404 if there are none |
//! | `GET`    | `/categories/{id}/questions` | exact match on the category's `type` |
//! | `GET`    | `/questions` | `?page` (default 1), `?category` (case-insensitive) |
//! | `POST`   | `/questions` | 201 + created question |
//! | `DELETE` | `/questions/{id}` | |
//! | `GET`    | `/questions/search` | `?query=<term>` |
//! | `POST`   | `/questions/search` | body `{"query": "<term>"}` |
//! | `POST`   | `/play_quiz` | random unseen question, or `null` |

pub mod categories;
pub mod error;
pub mod questions;
pub mod quiz;

use std::sync::Arc;

use axum::{
  Router,
  http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
  },
  routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};
use trivia_core::{
  quiz::{OsRandom, RandomSource},
  store::TriviaStore,
};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers: the store handle and the
/// random source used by `/play_quiz`.
#[derive(Clone)]
pub struct AppState<S: TriviaStore> {
  pub store: Arc<S>,
  pub rng:   Arc<dyn RandomSource>,
}

impl<S: TriviaStore> AppState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      store,
      rng: Arc::new(OsRandom),
    }
  }

  /// Replace the random source, e.g. with a deterministic one in tests.
  pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
    self.rng = rng;
    self
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: TriviaStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Categories
    .route("/categories", get(categories::list::<S>))
    .route(
      "/categories/{category_id}/questions",
      get(categories::questions::<S>),
    )
    // Questions
    .route(
      "/questions",
      get(questions::list::<S>).post(questions::create::<S>),
    )
    .route("/questions/{id}", delete(questions::delete_one::<S>))
    .route(
      "/questions/search",
      get(questions::search_query::<S>).post(questions::search_body::<S>),
    )
    // Quiz
    .route("/play_quiz", post(quiz::play::<S>))
    .fallback(not_found)
    .method_not_allowed_fallback(method_not_allowed)
    .layer(cors_layer())
    .with_state(state)
}

/// Unrestricted CORS: any origin, the methods the frontend uses, and the
/// `Content-Type` and `Authorization` headers.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([
      Method::GET,
      Method::PATCH,
      Method::POST,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn not_found() -> ApiError { ApiError::NotFound("no such route".into()) }

async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }
