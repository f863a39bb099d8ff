use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PhotoRow {
    pub id: i64,
    pub filename: String,
    pub event_id: i64,
    pub uploaded_at: NaiveDateTime,
}
