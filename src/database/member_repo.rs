use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::MemberRow;

const SQL_LIST_MEMBERS: &str = r#"
SELECT
  id,
  name,
  email,
  join_date,
  profile_image
FROM member
ORDER BY id ASC
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<MemberRow>> {
    sqlx::query_as::<_, MemberRow>(SQL_LIST_MEMBERS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_MEMBER_BY_ID: &str = r#"
SELECT
  id,
  name,
  email,
  join_date,
  profile_image
FROM member
WHERE id = ?
LIMIT 1
"#;

pub async fn load_by_id(pool: &SqlitePool, member_id: i64) -> sqlx::Result<Option<MemberRow>> {
    sqlx::query_as::<_, MemberRow>(SQL_LOAD_MEMBER_BY_ID)
        .bind(member_id)
        .fetch_optional(pool)
        .await
}

// The column is COLLATE NOCASE, so this matches case-insensitively.
const SQL_EMAIL_EXISTS: &str = r#"
SELECT EXISTS (SELECT 1 FROM member WHERE email = ?)
"#;

pub async fn email_exists(pool: &SqlitePool, email: &str) -> sqlx::Result<bool> {
    let exists = sqlx::query_scalar::<_, i64>(SQL_EMAIL_EXISTS)
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(exists == 1)
}

const SQL_COUNT_MEMBERS: &str = "SELECT COUNT(*) FROM member";

pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_MEMBERS)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_MEMBER: &str = r#"
INSERT INTO member (
  name,
  email,
  join_date,
  profile_image
) VALUES (?, ?, ?, ?)
"#;

pub struct NewMember<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub join_date: NaiveDateTime,
    pub profile_image: Option<&'a str>,
}

pub async fn insert_member(pool: &SqlitePool, member: NewMember<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_MEMBER)
        .bind(member.name)
        .bind(member.email)
        .bind(member.join_date)
        .bind(member.profile_image)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_LIST_MEMBERS_FOR_EVENT: &str = r#"
SELECT
  m.id,
  m.name,
  m.email,
  m.join_date,
  m.profile_image
FROM member m
JOIN participation p ON p.member_id = m.id
WHERE p.event_id = ?
ORDER BY p.joined_at ASC, m.id ASC
"#;

pub async fn list_for_event(pool: &SqlitePool, event_id: i64) -> sqlx::Result<Vec<MemberRow>> {
    sqlx::query_as::<_, MemberRow>(SQL_LIST_MEMBERS_FOR_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_MEMBERS_NOT_IN_EVENT: &str = r#"
SELECT
  m.id,
  m.name,
  m.email,
  m.join_date,
  m.profile_image
FROM member m
WHERE NOT EXISTS (
  SELECT 1
  FROM participation p
  WHERE p.member_id = m.id
    AND p.event_id = ?
)
ORDER BY m.name ASC, m.id ASC
"#;

pub async fn list_not_in_event(pool: &SqlitePool, event_id: i64) -> sqlx::Result<Vec<MemberRow>> {
    sqlx::query_as::<_, MemberRow>(SQL_LIST_MEMBERS_NOT_IN_EVENT)
        .bind(event_id)
        .fetch_all(pool)
        .await
}
