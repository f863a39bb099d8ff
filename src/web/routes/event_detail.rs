use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::event_service::{self, EventDetailView, JoinOutcome};
use crate::services::photo_service;
use crate::services::upload_store::UploadStore;
use crate::services::ServiceError;
use crate::web::form::SubmittedForm;
use crate::web::notice::{redirect_with_notice, Notice, NoticeQuery, NoticeView};
use crate::web::render::{internal_error, not_found, render_page};

#[derive(Template)]
#[template(path = "event_detail.html")]
pub struct EventDetailTemplate {
    pub event: EventDetailView,
    pub notice: Option<NoticeView>,
}

pub async fn event_detail_page(
    Path(raw_id): Path<String>,
    Query(query): Query<NoticeQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let Some(event_id) = parse_event_id(&raw_id) else {
        return not_found();
    };

    match event_service::load_event_detail(&pool, event_id).await {
        Ok(Some(event)) => render_page(&EventDetailTemplate {
            event,
            notice: query.resolve(),
        }),
        Ok(None) => not_found(),
        Err(e) => {
            warn!("Event detail load failed for {}: {}", event_id, e);
            internal_error()
        }
    }
}

/// Handles both forms on the event page: a `photo` upload or a `member_id`
/// join. A real upload wins when both are present.
pub async fn event_detail_post(
    Path(raw_id): Path<String>,
    State(pool): State<SqlitePool>,
    State(uploads): State<UploadStore>,
    form: SubmittedForm,
) -> Response {
    let Some(event_id) = parse_event_id(&raw_id) else {
        return not_found();
    };
    match event_service::event_exists(&pool, event_id).await {
        Ok(true) => {}
        Ok(false) => return not_found(),
        Err(e) => {
            warn!("Event lookup failed for {}: {}", event_id, e);
            return internal_error();
        }
    }

    let back = format!("/event/{}", event_id);

    if let Some(photo) = form.file("photo") {
        let notice =
            match photo_service::upload_photo(&pool, &uploads, event_id, photo.as_image()).await {
                Ok(_) => Notice::PhotoUploaded,
                Err(ServiceError::EventNotFound(_)) => return not_found(),
                Err(e) => Notice::for_failure("Photo upload", &e),
            };
        return redirect_with_notice(&back, notice).into_response();
    }
    if form.has_empty_file("photo") {
        return redirect_with_notice(&back, Notice::NoFileSelected).into_response();
    }

    let Some(raw_member_id) = form
        .text("member_id")
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return Redirect::to(&back).into_response();
    };
    let Ok(member_id) = raw_member_id.parse::<i64>() else {
        return redirect_with_notice(&back, Notice::MemberNotFound).into_response();
    };

    let notice = match event_service::join_event(&pool, event_id, member_id).await {
        Ok(JoinOutcome::Joined) => Notice::MemberJoined,
        Ok(JoinOutcome::AlreadyJoined) => Notice::AlreadyJoined,
        Err(ServiceError::EventNotFound(_)) => return not_found(),
        Err(e) => Notice::for_failure("Join event", &e),
    };
    redirect_with_notice(&back, notice).into_response()
}

fn parse_event_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
