use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::database::{event_repo, member_repo, participation_repo, photo_repo};
use crate::models::{EventRow, EventSummaryRow};
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::labels;
use crate::services::member_service::MemberView;
use crate::services::photo_service::PhotoView;

/// How many events the home page shows.
pub const RECENT_EVENTS_LIMIT: i64 = 5;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct EventCardView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_label: String,
    pub participant_count: i64,
    pub photo_count: i64,
}

impl From<EventSummaryRow> for EventCardView {
    fn from(row: EventSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: labels::non_empty(row.description),
            date_label: labels::date_time_label(&row.date),
            participant_count: row.participant_count,
            photo_count: row.photo_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecentEventView {
    pub id: i64,
    pub title: String,
    pub date_label: String,
}

impl From<EventRow> for RecentEventView {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            date_label: labels::date_time_label(&row.date),
            title: row.title,
        }
    }
}

pub struct ParticipantView {
    pub member: MemberView,
    pub joined_at_label: String,
}

pub struct EventDetailView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_label: String,
    pub created_at_label: String,
    pub participants: Vec<ParticipantView>,
    pub available_members: Vec<MemberView>,
    pub photos: Vec<PhotoView>,
}

pub struct NewEventInput<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub date: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
}

/// Accepts `2024-05-01T10:00` (datetime-local input) and falls back to a
/// bare `2024-05-01`, which means midnight.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub async fn list_events(pool: &SqlitePool) -> sqlx::Result<Vec<EventCardView>> {
    let rows = event_repo::list_summaries(pool).await?;
    Ok(rows.into_iter().map(EventCardView::from).collect())
}

pub async fn list_recent_events(pool: &SqlitePool) -> sqlx::Result<Vec<RecentEventView>> {
    let rows = event_repo::list_recent(pool, RECENT_EVENTS_LIMIT).await?;
    Ok(rows.into_iter().map(RecentEventView::from).collect())
}

pub async fn create_event(pool: &SqlitePool, input: NewEventInput<'_>) -> ServiceResult<i64> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ServiceError::MissingField("title"));
    }
    let Some(date) = parse_event_date(input.date) else {
        debug!("rejecting event date {:?}", input.date);
        return Err(ServiceError::InvalidDate(input.date.to_string()));
    };
    let description = input.description.map(str::trim).filter(|s| !s.is_empty());

    let id = event_repo::insert_event(
        pool,
        event_repo::NewEvent {
            title,
            description,
            date,
            created_at: Utc::now().naive_utc(),
        },
    )
    .await?;
    info!("event {} created ({})", id, title);
    Ok(id)
}

pub async fn load_event_detail(
    pool: &SqlitePool,
    event_id: i64,
) -> sqlx::Result<Option<EventDetailView>> {
    let Some(event) = event_repo::load_by_id(pool, event_id).await? else {
        return Ok(None);
    };
    let participants = member_repo::list_for_event(pool, event_id).await?;
    let joined_at: HashMap<i64, NaiveDateTime> =
        participation_repo::list_for_event(pool, event_id)
            .await?
            .into_iter()
            .map(|p| (p.member_id, p.joined_at))
            .collect();
    let available = member_repo::list_not_in_event(pool, event_id).await?;
    let photos = photo_repo::list_for_event(pool, event_id).await?;

    Ok(Some(EventDetailView {
        id: event.id,
        date_label: labels::date_time_label(&event.date),
        created_at_label: labels::date_time_label(&event.created_at),
        title: event.title,
        description: labels::non_empty(event.description),
        participants: participants
            .into_iter()
            .map(|row| ParticipantView {
                joined_at_label: joined_at
                    .get(&row.id)
                    .map(labels::date_time_label)
                    .unwrap_or_default(),
                member: MemberView::from(row),
            })
            .collect(),
        available_members: available.into_iter().map(MemberView::from).collect(),
        photos: photos.into_iter().map(PhotoView::from).collect(),
    }))
}

pub async fn event_exists(pool: &SqlitePool, event_id: i64) -> sqlx::Result<bool> {
    Ok(event_repo::load_by_id(pool, event_id).await?.is_some())
}

/// Adds the member to the event. Joining twice is reported, not an error.
pub async fn join_event(
    pool: &SqlitePool,
    event_id: i64,
    member_id: i64,
) -> ServiceResult<JoinOutcome> {
    if !event_exists(pool, event_id).await? {
        return Err(ServiceError::EventNotFound(event_id));
    }
    if member_repo::load_by_id(pool, member_id).await?.is_none() {
        return Err(ServiceError::MemberNotFound(member_id));
    }

    let inserted = participation_repo::insert_participation(
        pool,
        member_id,
        event_id,
        Utc::now().naive_utc(),
    )
    .await?;

    if inserted == 0 {
        debug!("member {} already joined event {}", member_id, event_id);
        return Ok(JoinOutcome::AlreadyJoined);
    }
    info!("member {} joined event {}", member_id, event_id);
    Ok(JoinOutcome::Joined)
}
