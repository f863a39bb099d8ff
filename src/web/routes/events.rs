use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::event_service::{self, EventCardView, NewEventInput};
use crate::web::form::SubmittedForm;
use crate::web::notice::{redirect_with_notice, Notice, NoticeQuery, NoticeView};
use crate::web::render::{internal_error, render_page};

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub events: Vec<EventCardView>,
    pub notice: Option<NoticeView>,
}

pub async fn events_page(
    Query(query): Query<NoticeQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    match event_service::list_events(&pool).await {
        Ok(events) => render_page(&EventsTemplate {
            events,
            notice: query.resolve(),
        }),
        Err(e) => {
            warn!("Event list load failed: {}", e);
            internal_error()
        }
    }
}

pub async fn create_event_handler(State(pool): State<SqlitePool>, form: SubmittedForm) -> Response {
    let input = NewEventInput {
        title: form.text_or_empty("title"),
        description: form.text("description"),
        date: form.text_or_empty("date"),
    };

    let notice = match event_service::create_event(&pool, input).await {
        Ok(_) => Notice::EventCreated,
        Err(e) => Notice::for_failure("Create event", &e),
    };
    redirect_with_notice("/events", notice).into_response()
}
