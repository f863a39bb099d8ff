use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clubhouse::config::{AppConfig, LogFormat};
use clubhouse::database;
use clubhouse::services::upload_store::UploadStore;
use clubhouse::web::{self, AppState};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() {
    // 1. Configuration and logging
    let config = AppConfig::from_env();
    init_tracing(config.log_format);

    if let Err(e) = run(config).await {
        error!("clubhouse stopped: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn run(config: AppConfig) -> Result<(), BoxError> {
    info!(build = clubhouse::BUILD_ID, "starting clubhouse");

    // 2. Database and upload directory
    info!("connecting to database {}", config.database_url);
    let pool = database::connect(&config.database_url, config.db_max_connections).await?;

    let uploads = UploadStore::new(&config.upload_dir);
    uploads.ensure_dir().await?;

    // 3. Router
    let app = web::build_router(AppState::new(pool, uploads), &config);

    // 4. Serve (with fallback port)
    let listener = bind_with_fallback(&config.host, config.port).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}

async fn bind_with_fallback(host: &str, port: u16) -> Result<TcpListener, BoxError> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback_port = port.saturating_add(1);
            warn!(
                "could not bind {}: {}; trying {}:{}",
                addr, e, host, fallback_port
            );
            let fallback: SocketAddr = format!("{}:{}", host, fallback_port).parse()?;
            Ok(TcpListener::bind(fallback).await?)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
