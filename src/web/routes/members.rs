use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::member_service::{self, MemberView, NewMemberInput};
use crate::services::upload_store::UploadStore;
use crate::web::form::{SubmittedForm, UploadedFile};
use crate::web::notice::{redirect_with_notice, Notice, NoticeQuery, NoticeView};
use crate::web::render::{internal_error, render_page};

#[derive(Template)]
#[template(path = "members.html")]
pub struct MembersTemplate {
    pub members: Vec<MemberView>,
    pub notice: Option<NoticeView>,
}

pub async fn members_page(
    Query(query): Query<NoticeQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    match member_service::list_members(&pool).await {
        Ok(members) => render_page(&MembersTemplate {
            members,
            notice: query.resolve(),
        }),
        Err(e) => {
            warn!("Member list load failed: {}", e);
            internal_error()
        }
    }
}

pub async fn create_member_handler(
    State(pool): State<SqlitePool>,
    State(uploads): State<UploadStore>,
    form: SubmittedForm,
) -> Response {
    let input = NewMemberInput {
        name: form.text_or_empty("name"),
        email: form.text_or_empty("email"),
        profile_image: form.file("profile_image").map(UploadedFile::as_image),
    };

    let notice = match member_service::create_member(&pool, &uploads, input).await {
        Ok(_) => Notice::MemberAdded,
        Err(e) => Notice::for_failure("Create member", &e),
    };
    redirect_with_notice("/members", notice).into_response()
}
