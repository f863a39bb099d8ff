use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::ParticipationRow;

// The composite primary key turns a repeated join into a no-op.
const SQL_INSERT_PARTICIPATION: &str = r#"
INSERT OR IGNORE INTO participation (
  member_id,
  event_id,
  joined_at
) VALUES (?, ?, ?)
"#;

/// Returns the number of inserted rows: 1 for a new participation, 0 when
/// the member already joined the event.
pub async fn insert_participation(
    pool: &SqlitePool,
    member_id: i64,
    event_id: i64,
    joined_at: NaiveDateTime,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPATION)
        .bind(member_id)
        .bind(event_id)
        .bind(joined_at)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_PARTICIPATION_FOR_EVENT: &str = r#"
SELECT
  member_id,
  event_id,
  joined_at
FROM participation
WHERE event_id = ?
ORDER BY joined_at ASC
"#;

pub async fn list_for_event(
    pool: &SqlitePool,
    event_id: i64,
) -> sqlx::Result<Vec<ParticipationRow>> {
    sqlx::query_as::<_, ParticipationRow>(SQL_LIST_PARTICIPATION_FOR_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await
}
