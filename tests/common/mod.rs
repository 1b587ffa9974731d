//! Shared test harness for integration tests.
//!
//! [`TestHarness`] builds an [`AppContext`] over an in-memory database and a
//! temporary image directory, and drives the router with `oneshot`.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use catalog::server::{build_router, AppContext};
use catalog::service::ItemService;
use catalog_core::config::Config;
use catalog_db::pool::init_memory_pool;
use catalog_db::ItemRepository;

pub const BOUNDARY: &str = "catalog-test-boundary";

/// Bytes written as the default image by [`TestHarness::with_default_image`].
pub const DEFAULT_IMAGE: &[u8] = b"\xFF\xD8\xFF default placeholder";

pub struct TestHarness {
    pub ctx: AppContext,
    pub images_dir: PathBuf,
    _dir: TempDir,
}

impl TestHarness {
    /// Harness with default configuration and an empty image directory.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Harness with a custom configuration. The image directory is always
    /// redirected into a temporary directory.
    pub fn with_config(mut config: Config) -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let images_dir = dir.path().join("images");
        config.images.storage_dir = images_dir.clone();

        let repo = ItemRepository::new(init_memory_pool().expect("failed to create pool"));
        let service = ItemService::from_config(&config, repo);

        Self {
            ctx: AppContext::new(config, service),
            images_dir,
            _dir: dir,
        }
    }

    /// Harness whose image directory already holds `default.jpg`.
    pub fn with_default_image() -> Self {
        let harness = Self::new();
        std::fs::create_dir_all(&harness.images_dir).unwrap();
        std::fs::write(harness.images_dir.join("default.jpg"), DEFAULT_IMAGE).unwrap();
        harness
    }

    pub fn app(&self) -> Router {
        build_router(self.ctx.clone())
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// POST /items with the three expected form fields.
    pub async fn post_item(
        &self,
        name: &str,
        category: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Response<Body> {
        let body = MultipartBuilder::new()
            .text("name", name)
            .text("category", category)
            .file("image", filename, bytes)
            .finish();
        self.send(multipart_request(body)).await
    }
}

/// Build a POST /items request with a pre-encoded multipart body.
pub fn multipart_request(body: Vec<u8>) -> Request<Body> {
    Request::post("/items")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Minimal multipart/form-data encoder for tests.
pub struct MultipartBuilder {
    buf: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.buf
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
