use askama::Template;
use axum::{extract::State, response::Response};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::photo_service::{self, AlbumView};
use crate::web::render::{internal_error, render_page};

#[derive(Template)]
#[template(path = "albums.html")]
pub struct AlbumsTemplate {
    pub albums: Vec<AlbumView>,
}

pub async fn albums_page(State(pool): State<SqlitePool>) -> Response {
    match photo_service::list_albums(&pool).await {
        Ok(albums) => render_page(&AlbumsTemplate { albums }),
        Err(e) => {
            warn!("Album list load failed: {}", e);
            internal_error()
        }
    }
}
