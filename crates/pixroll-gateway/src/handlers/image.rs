use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use pixroll_core::Category;
use tracing::instrument;
use url::Url;

/// `GET /random`: redirect to an image from any category.
#[instrument(skip_all)]
pub async fn random_image_handler(State(state): State<AppState>) -> Result<Response> {
    let url = state.catalog().pick_from_any_category().await?;
    redirect_to(&url)
}

/// `GET /{category}`: redirect to an image from one category.
///
/// The name is checked on the raw path segment, before percent-decoding,
/// so encoded separators never reach the filesystem.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn category_image_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let raw = uri.path().trim_start_matches('/');
    let category = Category::new(raw)?;

    let url = state.catalog().pick_from_category(&category).await?;
    redirect_to(&url)
}

/// Builds a `302 Found` pointing at `target`.
fn redirect_to(target: &str) -> Result<Response> {
    // header values admit raw high bytes, so non-ASCII URLs are encoded first
    let location = if target.is_ascii() {
        HeaderValue::from_str(target).ok()
    } else {
        Url::parse(target)
            .ok()
            .and_then(|encoded| HeaderValue::from_str(encoded.as_str()).ok())
    }
    .ok_or_else(|| AppError::InvalidRedirectTarget(target.to_string()))?;

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
    )
        .into_response())
}
