use sqlx::SqlitePool;

use crate::services::event_service::{self, RecentEventView};
use crate::services::member_service;

pub struct HomeView {
    pub recent_events: Vec<RecentEventView>,
    pub member_count: i64,
}

pub async fn load_home_view(pool: &SqlitePool) -> sqlx::Result<HomeView> {
    let recent_events = event_service::list_recent_events(pool).await?;
    let member_count = member_service::member_count(pool).await?;
    Ok(HomeView {
        recent_events,
        member_count,
    })
}
