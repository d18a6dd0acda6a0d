//! The `TriviaStore` trait.
//!
//! Implemented by storage backends (e.g. `trivia-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  category::Category,
  question::{NewQuestion, Question},
};

/// Abstraction over a question bank backend.
///
/// Every method is a self-contained unit of work; nothing is held open
/// between calls. All methods return `Send` futures so the trait can be used
/// from a multi-threaded runtime (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Categories ────────────────────────────────────────────────────────

  /// All categories, ordered by id.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  /// Insert a category. Administrative only; there is no HTTP route for it.
  fn add_category(
    &self,
    kind: String,
  ) -> impl Future<Output = Result<Category, Self::Error>> + Send + '_;

  // ── Questions ─────────────────────────────────────────────────────────

  /// All questions, ordered by ascending id.
  fn list_questions(
    &self,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Persist a new question and return it with its assigned id.
  fn add_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Permanently remove a question. Errors if no row has this id.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Questions whose text contains `term`, ignoring case, ordered by id.
  /// Wildcard characters in `term` match literally.
  fn search_questions<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Questions whose `category` equals `kind` exactly, ordered by id.
  fn questions_in_category<'a>(
    &'a self,
    kind: &'a str,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Questions not listed in `exclude`, restricted to category `kind` when
  /// given, ordered by id.
  fn quiz_candidates<'a>(
    &'a self,
    kind: Option<&'a str>,
    exclude: &'a [i64],
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;
}
