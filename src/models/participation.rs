use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipationRow {
    pub member_id: i64,
    pub event_id: i64,
    pub joined_at: NaiveDateTime,
}
