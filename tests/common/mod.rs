use std::net::SocketAddr;
use std::path::PathBuf;

use clubhouse::config::AppConfig;
use clubhouse::database;
use clubhouse::services::upload_store::UploadStore;
use clubhouse::web::{build_router, AppState};
use reqwest::{multipart, redirect, Client, Response, StatusCode};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub upload_dir: PathBuf,
    client: Client,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> TestApp {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            database_url: format!("sqlite://{}", dir.path().join("club.db").display()),
            upload_dir: dir.path().join("uploads"),
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            ..AppConfig::default()
        };

        let pool = database::connect(&config.database_url, 2)
            .await
            .expect("connect database");
        let uploads = UploadStore::new(&config.upload_dir);
        uploads.ensure_dir().await.expect("upload dir");

        let app = build_router(AppState::new(pool.clone(), uploads), &config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("listener addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("http client");

        TestApp {
            addr,
            pool,
            upload_dir: config.upload_dir,
            client,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request");
        let status = resp.status();
        let body = resp.text().await.expect("response body");
        (status, body)
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("POST form")
    }

    pub async fn post_multipart(&self, path: &str, form: multipart::Form) -> Response {
        self.client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("POST multipart")
    }

    pub async fn create_member(&self, name: &str, email: &str) {
        let resp = self
            .post_form("/members", &[("name", name), ("email", email)])
            .await;
        assert_eq!(location(&resp), "/members?notice=member_added");
    }

    pub async fn create_event(&self, title: &str, date: &str) {
        let resp = self
            .post_form(
                "/events",
                &[("title", title), ("description", ""), ("date", date)],
            )
            .await;
        assert_eq!(location(&resp), "/events?notice=event_created");
    }
}

pub fn location(resp: &Response) -> String {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "expected a redirect");
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

pub fn file_part(file_name: &str, bytes: &[u8]) -> multipart::Part {
    multipart::Part::bytes(bytes.to_vec()).file_name(file_name.to_string())
}
