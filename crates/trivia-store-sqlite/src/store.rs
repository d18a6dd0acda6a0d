//! [`SqliteStore`] — the SQLite implementation of [`TriviaStore`].

use std::{collections::BTreeSet, path::Path};

use rusqlite::{OptionalExtension as _, functions::FunctionFlags, types::Value};

use trivia_core::{
  category::Category,
  question::{NewQuestion, Question},
  store::TriviaStore,
};

use crate::{Error, Result, schema::SCHEMA};

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question {
    id:         row.get(0)?,
    question:   row.get(1)?,
    answer:     row.get(2)?,
    difficulty: row.get(3)?,
    category:   row.get(4)?,
  })
}

fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
  Ok(Category { id: row.get(0)?, kind: row.get(1)? })
}

/// Register `unicode_lower(text)`, a full Unicode lowercase fold. SQLite's
/// built-in `lower()` and `LIKE` only fold ASCII.
fn register_functions(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    "unicode_lower",
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let text: Option<String> = ctx.get(0)?;
      Ok(text.map(|t| t.to_lowercase()))
    },
  )
}

/// Escape `LIKE` wildcards so `term` matches literally under `ESCAPE '\'`.
fn escape_like(term: &str) -> String {
  let mut out = String::with_capacity(term.len());
  for c in term.chars() {
    if matches!(c, '\\' | '%' | '_') {
      out.push('\\');
    }
    out.push(c);
  }
  out
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A question bank backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        register_functions(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `sql` with `params` and collect every row as a [`Question`].
  async fn query_questions(
    &self,
    sql: String,
    params: Vec<Value>,
  ) -> Result<Vec<Question>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = Error;

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, type FROM categories WHERE id = ?1",
            rusqlite::params![id],
            category_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(row)
  }

  async fn add_category(&self, kind: String) -> Result<Category> {
    let name = kind.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO categories (type) VALUES (?1)",
          rusqlite::params![name],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(Category { id, kind })
  }

  // ── Questions ─────────────────────────────────────────────────────────────

  async fn list_questions(&self) -> Result<Vec<Question>> {
    self
      .query_questions(
        format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
        vec![],
      )
      .await
  }

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            rusqlite::params![id],
            question_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(row)
  }

  async fn add_question(&self, input: NewQuestion) -> Result<Question> {
    let row = input.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (question, answer, difficulty, category)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![row.question, row.answer, row.difficulty, row.category],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(input.into_question(id))
  }

  async fn delete_question(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM questions WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(trivia_core::Error::QuestionNotFound(id).into());
    }
    Ok(())
  }

  async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
    // Both sides are folded with `unicode_lower` so non-ASCII letters match
    // regardless of case.
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    self
      .query_questions(
        format!(
          "SELECT {QUESTION_COLUMNS} FROM questions
           WHERE unicode_lower(question) LIKE ?1 ESCAPE '\\'
           ORDER BY id"
        ),
        vec![Value::Text(pattern)],
      )
      .await
  }

  async fn questions_in_category(&self, kind: &str) -> Result<Vec<Question>> {
    self
      .query_questions(
        format!(
          "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
        ),
        vec![Value::Text(kind.to_owned())],
      )
      .await
  }

  async fn quiz_candidates(
    &self,
    kind: Option<&str>,
    exclude: &[i64],
  ) -> Result<Vec<Question>> {
    // Excluded ids travel as one JSON array parameter so the list length is
    // not bounded by SQLite's host parameter limit.
    let unique: BTreeSet<i64> = exclude.iter().copied().collect();
    let exclude_json = serde_json::to_string(&unique)?;
    let kind = kind.map_or(Value::Null, |k| Value::Text(k.to_owned()));

    self
      .query_questions(
        format!(
          "SELECT {QUESTION_COLUMNS} FROM questions
           WHERE (?1 IS NULL OR category = ?1)
             AND id NOT IN (SELECT value FROM json_each(?2))
           ORDER BY id"
        ),
        vec![kind, Value::Text(exclude_json)],
      )
      .await
  }
}

#[cfg(test)]
mod escape_tests {
  use super::escape_like;

  #[test]
  fn escapes_wildcards() {
    assert_eq!(escape_like("100%"), "100\\%");
    assert_eq!(escape_like("a_b"), "a\\_b");
    assert_eq!(escape_like("c:\\"), "c:\\\\");
    assert_eq!(escape_like("plain"), "plain");
  }
}
