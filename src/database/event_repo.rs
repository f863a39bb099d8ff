use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::{EventRow, EventSummaryRow};

const SQL_LIST_EVENT_SUMMARIES: &str = r#"
SELECT
  e.id,
  e.title,
  e.description,
  e.date,
  (SELECT COUNT(*) FROM participation p WHERE p.event_id = e.id) AS participant_count,
  (SELECT COUNT(*) FROM photo ph WHERE ph.event_id = e.id) AS photo_count
FROM event e
ORDER BY e.date DESC, e.id DESC
"#;

pub async fn list_summaries(pool: &SqlitePool) -> sqlx::Result<Vec<EventSummaryRow>> {
    sqlx::query_as::<_, EventSummaryRow>(SQL_LIST_EVENT_SUMMARIES)
        .fetch_all(pool)
        .await
}

const SQL_LIST_RECENT_EVENTS: &str = r#"
SELECT
  id,
  title,
  description,
  date,
  created_at
FROM event
ORDER BY date DESC, id DESC
LIMIT ?
"#;

pub async fn list_recent(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LIST_RECENT_EVENTS)
        .bind(limit)
        .fetch_all(pool)
        .await
}

const SQL_LIST_EVENTS: &str = r#"
SELECT
  id,
  title,
  description,
  date,
  created_at
FROM event
ORDER BY id ASC
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LIST_EVENTS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_EVENT_BY_ID: &str = r#"
SELECT
  id,
  title,
  description,
  date,
  created_at
FROM event
WHERE id = ?
LIMIT 1
"#;

pub async fn load_by_id(pool: &SqlitePool, event_id: i64) -> sqlx::Result<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LOAD_EVENT_BY_ID)
        .bind(event_id)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_EVENTS: &str = "SELECT COUNT(*) FROM event";

pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_EVENTS)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_EVENT: &str = r#"
INSERT INTO event (
  title,
  description,
  date,
  created_at
) VALUES (?, ?, ?, ?)
"#;

pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub async fn insert_event(pool: &SqlitePool, event: NewEvent<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_EVENT)
        .bind(event.title)
        .bind(event.description)
        .bind(event.date)
        .bind(event.created_at)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
