use sqlx::SqlitePool;
use tracing::debug;

const SQL_CREATE_MEMBER: &str = r#"
CREATE TABLE IF NOT EXISTS member (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE COLLATE NOCASE,
  join_date TEXT NOT NULL,
  profile_image TEXT
)
"#;

const SQL_CREATE_EVENT: &str = r#"
CREATE TABLE IF NOT EXISTS event (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  title TEXT NOT NULL,
  description TEXT,
  date TEXT NOT NULL,
  created_at TEXT NOT NULL
)
"#;

const SQL_CREATE_PHOTO: &str = r#"
CREATE TABLE IF NOT EXISTS photo (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  filename TEXT NOT NULL,
  event_id INTEGER NOT NULL REFERENCES event(id),
  uploaded_at TEXT NOT NULL
)
"#;

const SQL_CREATE_PARTICIPATION: &str = r#"
CREATE TABLE IF NOT EXISTS participation (
  member_id INTEGER NOT NULL REFERENCES member(id),
  event_id INTEGER NOT NULL REFERENCES event(id),
  joined_at TEXT NOT NULL,
  PRIMARY KEY (member_id, event_id)
)
"#;

const SQL_CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_event_date ON event(date)",
    "CREATE INDEX IF NOT EXISTS idx_photo_event_id ON photo(event_id)",
    "CREATE INDEX IF NOT EXISTS idx_participation_event_id ON participation(event_id)",
];

/// Creates every table the app needs. Safe to run on each startup.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for sql in [
        SQL_CREATE_MEMBER,
        SQL_CREATE_EVENT,
        SQL_CREATE_PHOTO,
        SQL_CREATE_PARTICIPATION,
    ] {
        sqlx::query(sql).execute(pool).await?;
    }
    for sql in SQL_CREATE_INDEXES {
        sqlx::query(sql).execute(pool).await?;
    }
    debug!("schema ready");
    Ok(())
}
