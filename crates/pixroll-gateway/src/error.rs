use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixroll_core::CatalogError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("redirect target is not a valid header value: {0}")]
    InvalidRedirectTarget(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Catalog(e) => {
                let class = e.class();
                let status =
                    StatusCode::from_u16(class.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = if class.is_internal() {
                    error!(code = %e.code(), metadata = ?e.metadata(), error = %e, "catalog failure");
                    INTERNAL_MESSAGE.to_string()
                } else {
                    debug!(code = %e.code(), metadata = ?e.metadata(), "request rejected");
                    e.to_string()
                };
                (
                    status,
                    ErrorResponse {
                        error: e.code().as_str(),
                        message,
                    },
                )
            }
            AppError::InvalidRedirectTarget(target) => {
                error!(target = %target, "cannot redirect to picked url");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "InternalError",
                        message: INTERNAL_MESSAGE.to_string(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
