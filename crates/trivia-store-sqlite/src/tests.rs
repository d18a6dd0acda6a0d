//! Integration tests for `SqliteStore` against an in-memory database.

use trivia_core::{question::NewQuestion, store::TriviaStore};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_question(text: &str, category: &str) -> NewQuestion {
  NewQuestion {
    question:   text.into(),
    answer:     "answer".into(),
    difficulty: 2,
    category:   category.into(),
  }
}

// ─── Categories ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_category() {
  let s = store().await;

  let science = s.add_category("Science".into()).await.unwrap();
  assert_eq!(science.kind, "Science");

  let fetched = s.get_category(science.id).await.unwrap();
  assert_eq!(fetched, Some(science));
}

#[tokio::test]
async fn get_category_missing_returns_none() {
  let s = store().await;
  assert!(s.get_category(42).await.unwrap().is_none());
}

#[tokio::test]
async fn list_categories_in_id_order() {
  let s = store().await;
  s.add_category("Science".into()).await.unwrap();
  s.add_category("Art".into()).await.unwrap();
  s.add_category("History".into()).await.unwrap();

  let all = s.list_categories().await.unwrap();
  let names: Vec<_> = all.iter().map(|c| c.kind.as_str()).collect();
  assert_eq!(names, ["Science", "Art", "History"]);
  assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

// ─── Questions ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_question_assigns_id_and_echoes_fields() {
  let s = store().await;

  let input = new_question("What is H2O?", "Science");
  let q = s.add_question(input.clone()).await.unwrap();
  assert_eq!(q.question, input.question);
  assert_eq!(q.answer, input.answer);
  assert_eq!(q.difficulty, input.difficulty);
  assert_eq!(q.category, input.category);

  let fetched = s.get_question(q.id).await.unwrap();
  assert_eq!(fetched, Some(q));
}

#[tokio::test]
async fn list_questions_in_id_order() {
  let s = store().await;
  for i in 0..5 {
    s.add_question(new_question(&format!("q{i}"), "Art"))
      .await
      .unwrap();
  }

  let all = s.list_questions().await.unwrap();
  assert_eq!(all.len(), 5);
  assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn delete_question_removes_row() {
  let s = store().await;
  let q = s
    .add_question(new_question("doomed", "Art"))
    .await
    .unwrap();

  s.delete_question(q.id).await.unwrap();

  assert!(s.get_question(q.id).await.unwrap().is_none());
  assert!(s.list_questions().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_question_errors() {
  let s = store().await;
  let err = s.delete_question(7).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(trivia_core::Error::QuestionNotFound(7))
  ));
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_is_case_insensitive_substring() {
  let s = store().await;
  s.add_question(new_question("Whose autobiography is entitled X?", "History"))
    .await
    .unwrap();
  s.add_question(new_question("What boxer's original name is Y?", "History"))
    .await
    .unwrap();

  let hits = s.search_questions("TITLE").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert!(hits[0].question.contains("entitled"));
}

#[tokio::test]
async fn search_without_match_is_empty() {
  let s = store().await;
  s.add_question(new_question("anything", "Art")).await.unwrap();
  assert!(s.search_questions("nothing like this").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;
  s.add_question(new_question("Is 100% of water wet?", "Science"))
    .await
    .unwrap();
  s.add_question(new_question("Plain question", "Science"))
    .await
    .unwrap();

  assert_eq!(s.search_questions("%").await.unwrap().len(), 1);
  assert!(s.search_questions("_").await.unwrap().is_empty());
}

// ─── Category lookups ────────────────────────────────────────────────────────

#[tokio::test]
async fn questions_in_category_is_case_sensitive() {
  let s = store().await;
  s.add_question(new_question("a", "Science")).await.unwrap();
  s.add_question(new_question("b", "science")).await.unwrap();
  s.add_question(new_question("c", "Art")).await.unwrap();

  let hits = s.questions_in_category("Science").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].question, "a");
}

#[tokio::test]
async fn quiz_candidates_excludes_previous() {
  let s = store().await;
  let a = s.add_question(new_question("a", "Science")).await.unwrap();
  let b = s.add_question(new_question("b", "Science")).await.unwrap();
  let c = s.add_question(new_question("c", "Art")).await.unwrap();

  let all = s.quiz_candidates(None, &[a.id]).await.unwrap();
  assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), [b.id, c.id]);

  let science = s.quiz_candidates(Some("Science"), &[b.id]).await.unwrap();
  assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), [a.id]);

  let none = s
    .quiz_candidates(Some("Science"), &[a.id, b.id])
    .await
    .unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn quiz_candidates_without_filters_returns_everything() {
  let s = store().await;
  s.add_question(new_question("a", "Science")).await.unwrap();
  s.add_question(new_question("b", "Art")).await.unwrap();

  assert_eq!(s.quiz_candidates(None, &[]).await.unwrap().len(), 2);
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
  let s = store().await;
  let q = s
    .add_question(new_question("Qui a peint ÉTÉ à Giverny?", "Art"))
    .await
    .unwrap();
  s.add_question(new_question("Unrelated", "Art")).await.unwrap();

  let hits = s.search_questions("été").await.unwrap();
  assert_eq!(hits.iter().map(|h| h.id).collect::<Vec<_>>(), [q.id]);

  let hits = s.search_questions("GIVERNY").await.unwrap();
  assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn quiz_candidates_accepts_large_exclusion_list() {
  let s = store().await;
  let a = s.add_question(new_question("a", "Science")).await.unwrap();
  let b = s.add_question(new_question("b", "Science")).await.unwrap();

  // Far more ids than SQLite allows as separate parameters, with repeats.
  let mut exclude: Vec<i64> = (1000..40_000).collect();
  exclude.push(a.id);
  exclude.push(a.id);

  let left = s.quiz_candidates(None, &exclude).await.unwrap();
  assert_eq!(left.iter().map(|q| q.id).collect::<Vec<_>>(), [b.id]);

  let left = s
    .quiz_candidates(Some("Science"), &exclude)
    .await
    .unwrap();
  assert_eq!(left.iter().map(|q| q.id).collect::<Vec<_>>(), [b.id]);
}
