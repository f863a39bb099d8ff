use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

// Event list rows carry the aggregate counts shown on the events page.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventSummaryRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub participant_count: i64,
    pub photo_count: i64,
}
