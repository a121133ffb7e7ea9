// tests/support/helpers.rs
use super::builders::user;
use super::mocks::{
    DummyClock, DummyTokenVerifier, InMemoryNewsRepo, InMemoryUserRepo, OTHER_ID, OWNER_ID,
    RecordingFileStore, SequentialTokens,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use news_core::application::services::{ApplicationServices, ServiceSettings};
use news_core::domain::upload::{UploadPolicy, default_image_types};
use news_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

pub const PUBLIC_BASE_URL: &str = "http://localhost:8080";
/// テスト用の画像上限（1 KiB）
pub const TEST_MAX_IMAGE_BYTES: u64 = 1024;
/// テスト用のリクエスト上限（64 KiB）
pub const TEST_MAX_REQUEST_BYTES: usize = 64 * 1024;
pub const GRACE_MINUTES: i64 = 10;

/// モック一式とそれを使うサービス
pub struct TestWorld {
    pub users: Arc<InMemoryUserRepo>,
    pub news: Arc<InMemoryNewsRepo>,
    pub files: Arc<RecordingFileStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestWorld {
    /// 所有者 (id=1, Ada) と別ユーザー (id=2, Grace) を登録済みの環境
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepo::with_users([
            user(OWNER_ID, "Ada"),
            user(OTHER_ID, "Grace"),
        ]));
        let news = Arc::new(InMemoryNewsRepo::new(Arc::clone(&users)));
        let files = Arc::new(RecordingFileStore::default());

        let settings = ServiceSettings {
            upload_policy: UploadPolicy::new(TEST_MAX_IMAGE_BYTES, default_image_types()),
            public_base_url: PUBLIC_BASE_URL.to_string(),
            orphan_grace: chrono::Duration::minutes(GRACE_MINUTES),
        };

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            news.clone(),
            news.clone(),
            files.clone(),
            Arc::new(DummyTokenVerifier),
            Arc::new(SequentialTokens::default()),
            Arc::new(DummyClock),
            settings,
        ));

        Self {
            users,
            news,
            files,
            services,
        }
    }

    pub fn router(&self, images_dir: PathBuf) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
            images_dir,
            max_request_bytes: TEST_MAX_REQUEST_BYTES,
            allowed_origins: vec!["*".into()],
        })
    }
}

pub fn multipart_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: &str,
    body: Vec<u8>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("expected JSON body");
    (status, json)
}

/// エラーレスポンスの `status` と `message` を確認する
pub async fn assert_error_message(resp: Response, expected_status: StatusCode, expected: &str) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);
    assert_eq!(json["status"], expected_status.as_u16());
    assert_eq!(json["message"], expected, "unexpected body: {json}");
}
