use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::PhotoRow;

const SQL_INSERT_PHOTO: &str = r#"
INSERT INTO photo (
  filename,
  event_id,
  uploaded_at
) VALUES (?, ?, ?)
"#;

pub async fn insert_photo(
    pool: &SqlitePool,
    event_id: i64,
    filename: &str,
    uploaded_at: NaiveDateTime,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_PHOTO)
        .bind(filename)
        .bind(event_id)
        .bind(uploaded_at)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_LIST_PHOTOS_FOR_EVENT: &str = r#"
SELECT
  id,
  filename,
  event_id,
  uploaded_at
FROM photo
WHERE event_id = ?
ORDER BY uploaded_at DESC, id DESC
"#;

pub async fn list_for_event(pool: &SqlitePool, event_id: i64) -> sqlx::Result<Vec<PhotoRow>> {
    sqlx::query_as::<_, PhotoRow>(SQL_LIST_PHOTOS_FOR_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_PHOTOS: &str = r#"
SELECT
  id,
  filename,
  event_id,
  uploaded_at
FROM photo
ORDER BY event_id ASC, uploaded_at DESC, id DESC
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<PhotoRow>> {
    sqlx::query_as::<_, PhotoRow>(SQL_LIST_PHOTOS)
        .fetch_all(pool)
        .await
}
