use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::database::member_repo;
use crate::models::MemberRow;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::labels;
use crate::services::upload_store::{UploadStore, UploadedImage};

#[derive(Debug, Clone)]
pub struct MemberView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub join_date_label: String,
    pub profile_image_url: Option<String>,
}

impl From<MemberRow> for MemberView {
    fn from(row: MemberRow) -> Self {
        Self {
            id: row.id,
            join_date_label: labels::date_label(&row.join_date),
            profile_image_url: row.profile_image.as_deref().map(labels::upload_url),
            name: row.name,
            email: row.email,
        }
    }
}

pub struct NewMemberInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub profile_image: Option<UploadedImage<'a>>,
}

pub async fn list_members(pool: &SqlitePool) -> sqlx::Result<Vec<MemberView>> {
    let rows = member_repo::list_all(pool).await?;
    Ok(rows.into_iter().map(MemberView::from).collect())
}

/// Registers a member. Nothing is written when the input is rejected; an
/// image saved before a failing insert is removed again.
pub async fn create_member(
    pool: &SqlitePool,
    uploads: &UploadStore,
    input: NewMemberInput<'_>,
) -> ServiceResult<i64> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ServiceError::MissingField("name"));
    }
    let email = input.email.trim();
    if email.is_empty() {
        return Err(ServiceError::MissingField("email"));
    }

    if member_repo::email_exists(pool, email).await? {
        debug!("rejecting duplicate email {}", email);
        return Err(ServiceError::DuplicateEmail);
    }

    let profile_image = match input.profile_image {
        Some(image) => Some(uploads.save_image("", image.file_name, image.bytes).await?),
        None => None,
    };

    let inserted = member_repo::insert_member(
        pool,
        member_repo::NewMember {
            name,
            email,
            join_date: Utc::now().naive_utc(),
            profile_image: profile_image.as_deref(),
        },
    )
    .await;

    match inserted {
        Ok(id) => {
            info!("member {} created ({})", id, email);
            Ok(id)
        }
        Err(e) => {
            if let Some(filename) = profile_image.as_deref() {
                uploads.remove(filename).await;
            }
            if is_unique_violation(&e) {
                Err(ServiceError::DuplicateEmail)
            } else {
                Err(ServiceError::Db(e))
            }
        }
    }
}

pub async fn member_count(pool: &SqlitePool) -> sqlx::Result<i64> {
    member_repo::count(pool).await
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
