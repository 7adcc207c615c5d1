use std::path::Path;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers::{category_image_handler, health_handler, random_image_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router.
    ///
    /// `public_dir` holds the documentation site: `/` serves its `index.html`
    /// and `/public/*` serves the rest of it.
    pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
        let public_dir = public_dir.as_ref();
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

        Router::new()
            .route("/health", get(health_handler))
            .route("/random", get(random_image_handler))
            .route("/{category}", get(category_image_handler))
            .route_service("/", ServeFile::new(public_dir.join("index.html")))
            .nest_service("/public", ServeDir::new(public_dir))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
