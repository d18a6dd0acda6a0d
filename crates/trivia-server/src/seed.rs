//! Default category seeding for `--seed`.

use trivia_core::{category::DEFAULT_CATEGORIES, store::TriviaStore};

/// Insert [`DEFAULT_CATEGORIES`] if the store has no categories yet.
/// Returns the number of categories inserted.
pub async fn seed_categories<S: TriviaStore>(store: &S) -> Result<usize, S::Error> {
  if !store.list_categories().await?.is_empty() {
    return Ok(0);
  }
  for name in DEFAULT_CATEGORIES {
    store.add_category(name.to_string()).await?;
  }
  Ok(DEFAULT_CATEGORIES.len())
}

#[cfg(test)]
mod tests {
  use trivia_store_sqlite::SqliteStore;

  use super::*;

  #[tokio::test]
  async fn seeds_empty_store_once() {
    let store = SqliteStore::open_in_memory().await.unwrap();

    assert_eq!(seed_categories(&store).await.unwrap(), 6);
    assert_eq!(seed_categories(&store).await.unwrap(), 0);

    let names: Vec<String> = store
      .list_categories()
      .await
      .unwrap()
      .into_iter()
      .map(|c| c.kind)
      .collect();
    assert_eq!(names, DEFAULT_CATEGORIES);
  }

  #[tokio::test]
  async fn leaves_existing_categories_alone() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.add_category("Custom".into()).await.unwrap();

    assert_eq!(seed_categories(&store).await.unwrap(), 0);
    assert_eq!(store.list_categories().await.unwrap().len(), 1);
  }
}
