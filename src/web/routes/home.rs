use askama::Template;
use axum::{extract::State, response::Response};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::home_service::{self, HomeView};
use crate::web::render::{internal_error, render_page};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub home: HomeView,
}

pub async fn index_handler(State(pool): State<SqlitePool>) -> Response {
    match home_service::load_home_view(&pool).await {
        Ok(home) => render_page(&IndexTemplate { home }),
        Err(e) => {
            warn!("Home page load failed: {}", e);
            internal_error()
        }
    }
}
