use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, get_service},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::services::upload_store::UploadStore;

pub mod form;
pub mod notice;
pub mod render;
pub mod routes;

use routes::{albums, event_detail, events, home, members};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(pool: SqlitePool, uploads: UploadStore) -> Self {
        Self { pool, uploads }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for UploadStore {
    fn from_ref(state: &AppState) -> Self {
        state.uploads.clone()
    }
}

pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let uploads_service = ServeDir::new(state.uploads.dir());
    let no_store = || {
        SetResponseHeaderLayer::if_not_present(CACHE_CONTROL, HeaderValue::from_static("no-store"))
    };

    Router::new()
        .route("/", get(home::index_handler))
        .route(
            "/members",
            get(members::members_page).post(members::create_member_handler),
        )
        .route(
            "/events",
            get(events::events_page).post(events::create_event_handler),
        )
        .route(
            "/event/:event_id",
            get(event_detail::event_detail_page).post(event_detail::event_detail_post),
        )
        .route("/albums", get(albums::albums_page))
        // Uploaded images never change once written.
        .nest_service(
            "/uploads",
            get_service(uploads_service).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        )
        .nest_service(
            "/assets",
            get_service(ServeDir::new(&config.assets_dir)).layer(no_store()),
        )
        .fallback(render::fallback_handler)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(no_store())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
