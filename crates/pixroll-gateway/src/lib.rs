//! HTTP gateway for pixroll.
//!
//! Maps routes onto the [`ImageCatalog`][pixroll_catalog::ImageCatalog] and
//! catalog errors onto status codes. Static documentation is served from a
//! public directory next to the API routes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;
