//! SQL schema for the trivia SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS categories (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    type  TEXT NOT NULL
);

-- `category` holds a category's `type`, not its id. There is intentionally
-- no foreign key.
CREATE TABLE IF NOT EXISTS questions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    question    TEXT    NOT NULL,
    answer      TEXT    NOT NULL,
    difficulty  INTEGER NOT NULL,
    category    TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS questions_category_idx ON questions(category);

PRAGMA user_version = 1;
";
