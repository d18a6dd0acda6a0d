//! Error types for `trivia-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("question not found: {0}")]
  QuestionNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
