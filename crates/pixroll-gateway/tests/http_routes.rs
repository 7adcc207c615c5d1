use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use pixroll_catalog::{CatalogService, CatalogSettings, ImageCatalog};
use pixroll_core::{CacheTtl, CatalogError, Category};
use pixroll_gateway::{App, AppState};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

struct Fixture {
    _dir: TempDir,
    categories: PathBuf,
    public: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let categories = dir.path().join("categories");
        let public = dir.path().join("public");
        fs::create_dir_all(&categories).unwrap();
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("index.html"), "<h1>pixroll</h1>").unwrap();
        fs::write(public.join("style.css"), "body { margin: 0 }").unwrap();
        Self {
            _dir: dir,
            categories,
            public,
        }
    }

    fn category(&self, name: &str, content: &str) -> &Self {
        fs::write(self.categories.join(format!("{name}.txt")), content).unwrap();
        self
    }

    fn router(&self) -> Router {
        let settings = CatalogSettings::builder()
            .base_dir(&self.categories)
            .cache_ttl(CacheTtl::Disabled)
            .build();
        let catalog = CatalogService::from_settings(settings);
        App::router(AppState::new(Arc::new(catalog)), &self.public)
    }
}

async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let fixture = Fixture::new();
    let response = get(fixture.router(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn category_redirects_to_one_of_its_urls() {
    let fixture = Fixture::new();
    fixture.category(
        "cats",
        "https://example.com/cat1.jpg\njavascript:alert(1)\nhttps://example.com/cat2.jpg\n",
    );

    for _ in 0..10 {
        let response = get(fixture.router(), "/cats").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        let target = location(&response);
        assert!(
            target == "https://example.com/cat1.jpg" || target == "https://example.com/cat2.jpg",
            "{target}"
        );
    }
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let fixture = Fixture::new();
    let response = get(fixture.router(), "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "CategoryNotFound");
}

#[tokio::test]
async fn category_without_valid_urls_is_unprocessable() {
    let fixture = Fixture::new();
    fixture.category("junk", "\n\njavascript:alert(1)\nftp://x/y\n");

    let response = get(fixture.router(), "/junk").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error"], "CategoryNoValidUrls");
}

#[tokio::test]
async fn invalid_category_names_are_rejected() {
    let fixture = Fixture::new();
    fixture.category("secret", "https://example.com/secret.jpg");

    for uri in ["/bad!name", "/..%5Csecret", "/%73ecret", "/cats.txt"] {
        let response = get(fixture.router(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json_body(response).await["error"], "InvalidCategory", "{uri}");
    }
}

#[tokio::test]
async fn random_picks_from_usable_categories() {
    let fixture = Fixture::new();
    fixture
        .category("empty", "")
        .category("junk", "ftp://x/y")
        .category("dogs", "https://example.com/dog.jpg");

    let response = get(fixture.router(), "/random").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://example.com/dog.jpg");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn random_without_categories_is_not_found() {
    let fixture = Fixture::new();
    let response = get(fixture.router(), "/random").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NoCategoryFiles");
}

#[tokio::test]
async fn random_with_only_bad_categories_is_not_found() {
    let fixture = Fixture::new();
    fixture.category("empty", "\n").category("junk", "ftp://x/y");

    let response = get(fixture.router(), "/random").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NoImagesAvailable");
}

#[tokio::test]
async fn serves_documentation() {
    let fixture = Fixture::new();

    let index = get(fixture.router(), "/").await;
    assert_eq!(index.status(), StatusCode::OK);
    let body = index.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>pixroll</h1>");

    let asset = get(fixture.router(), "/public/style.css").await;
    assert_eq!(asset.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let fixture = Fixture::new();
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://somewhere.example")
        .body(Body::empty())
        .unwrap();

    let response = fixture.router().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

/// A catalog that fails every call with an I/O error and counts calls.
#[derive(Default)]
struct FailingCatalog {
    calls: AtomicUsize,
}

#[async_trait]
impl ImageCatalog for FailingCatalog {
    async fn pick_from_category(&self, category: &Category) -> pixroll_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::FileReadFailed {
            path: PathBuf::from(format!("/secret/location/{category}.txt")),
            cause: "Permission denied (os error 13)".into(),
        })
    }

    async fn pick_from_any_category(&self) -> pixroll_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::DirectoryReadFailed {
            dir: PathBuf::from("/secret/location"),
            cause: "Permission denied (os error 13)".into(),
        })
    }
}

#[tokio::test]
async fn internal_failures_do_not_leak_details() {
    let fixture = Fixture::new();
    let catalog = Arc::new(FailingCatalog::default());
    let app = App::router(AppState::new(catalog.clone()), &fixture.public);

    for (uri, code) in [("/cats", "FileReadFailed"), ("/random", "DirectoryReadFailed")] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], code);
        assert!(!body["message"].as_str().unwrap().contains("/secret"));
    }
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalid_names_never_reach_the_catalog() {
    let fixture = Fixture::new();
    let catalog = Arc::new(FailingCatalog::default());
    let app = App::router(AppState::new(catalog.clone()), &fixture.public);

    let response = get(app, "/..%5Csecret").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
}
