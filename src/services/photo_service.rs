use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::database::{event_repo, photo_repo};
use crate::models::PhotoRow;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::labels;
use crate::services::upload_store::{UploadStore, UploadedImage};

#[derive(Debug, Clone)]
pub struct PhotoView {
    pub id: i64,
    pub filename: String,
    pub url: String,
    pub uploaded_at_label: String,
}

impl From<PhotoRow> for PhotoView {
    fn from(row: PhotoRow) -> Self {
        Self {
            id: row.id,
            url: labels::upload_url(&row.filename),
            uploaded_at_label: labels::date_time_label(&row.uploaded_at),
            filename: row.filename,
        }
    }
}

pub struct AlbumView {
    pub event_id: i64,
    pub title: String,
    pub date_label: String,
    pub photos: Vec<PhotoView>,
}

/// Stores the image and attaches it to the event.
pub async fn upload_photo(
    pool: &SqlitePool,
    uploads: &UploadStore,
    event_id: i64,
    image: UploadedImage<'_>,
) -> ServiceResult<i64> {
    if event_repo::load_by_id(pool, event_id).await?.is_none() {
        return Err(ServiceError::EventNotFound(event_id));
    }

    let prefix = format!("event_{}_", event_id);
    let filename = uploads
        .save_image(&prefix, image.file_name, image.bytes)
        .await?;

    match photo_repo::insert_photo(pool, event_id, &filename, Utc::now().naive_utc()).await {
        Ok(id) => {
            info!("photo {} attached to event {}", filename, event_id);
            Ok(id)
        }
        Err(e) => {
            uploads.remove(&filename).await;
            Err(ServiceError::Db(e))
        }
    }
}

/// Every event with its photos; events without photos get an empty album.
pub async fn list_albums(pool: &SqlitePool) -> sqlx::Result<Vec<AlbumView>> {
    let events = event_repo::list_all(pool).await?;
    let mut photos_by_event: HashMap<i64, Vec<PhotoView>> = HashMap::new();
    for row in photo_repo::list_all(pool).await? {
        photos_by_event
            .entry(row.event_id)
            .or_default()
            .push(PhotoView::from(row));
    }

    Ok(events
        .into_iter()
        .map(|event| AlbumView {
            event_id: event.id,
            date_label: labels::date_time_label(&event.date),
            photos: photos_by_event.remove(&event.id).unwrap_or_default(),
            title: event.title,
        })
        .collect())
}
