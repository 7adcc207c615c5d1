use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable error code, e.g. `CategoryNotFound`.
    pub error: &'static str,
    pub message: String,
}
