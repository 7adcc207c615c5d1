use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Stable identifiers for every failure the catalog can report.
///
/// The string form is part of the HTTP error body and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidCategory,
    CategoryNotFound,
    CategoryNoValidUrls,
    NoCategoryFiles,
    NoImagesAvailable,
    FileReadFailed,
    DirectoryReadFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCategory => "InvalidCategory",
            ErrorCode::CategoryNotFound => "CategoryNotFound",
            ErrorCode::CategoryNoValidUrls => "CategoryNoValidUrls",
            ErrorCode::NoCategoryFiles => "NoCategoryFiles",
            ErrorCode::NoImagesAvailable => "NoImagesAvailable",
            ErrorCode::FileReadFailed => "FileReadFailed",
            ErrorCode::DirectoryReadFailed => "DirectoryReadFailed",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity class of an error, in HTTP terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Unprocessable,
    Internal,
}

impl ErrorClass {
    /// The HTTP status number this class corresponds to.
    pub fn status(&self) -> u16 {
        match self {
            ErrorClass::BadRequest => 400,
            ErrorClass::NotFound => 404,
            ErrorClass::Unprocessable => 422,
            ErrorClass::Internal => 500,
        }
    }

    /// Whether the failure is an internal fault rather than an expected condition.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorClass::Internal)
    }
}

/// Errors produced while resolving categories and picking images.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("invalid category name: {name:?}")]
    InvalidCategory { name: String },
    #[error("category not found: {category}")]
    CategoryNotFound { category: String, path: PathBuf },
    #[error("category {category} has no valid image urls")]
    CategoryNoValidUrls { category: String, path: PathBuf },
    #[error("no category files found")]
    NoCategoryFiles { dir: PathBuf },
    #[error("no images available in any category")]
    NoImagesAvailable { attempted: usize },
    #[error("failed to read category file: {cause}")]
    FileReadFailed { path: PathBuf, cause: String },
    #[error("failed to read categories directory: {cause}")]
    DirectoryReadFailed { dir: PathBuf, cause: String },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::InvalidCategory { .. } => ErrorCode::InvalidCategory,
            CatalogError::CategoryNotFound { .. } => ErrorCode::CategoryNotFound,
            CatalogError::CategoryNoValidUrls { .. } => ErrorCode::CategoryNoValidUrls,
            CatalogError::NoCategoryFiles { .. } => ErrorCode::NoCategoryFiles,
            CatalogError::NoImagesAvailable { .. } => ErrorCode::NoImagesAvailable,
            CatalogError::FileReadFailed { .. } => ErrorCode::FileReadFailed,
            CatalogError::DirectoryReadFailed { .. } => ErrorCode::DirectoryReadFailed,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self.code() {
            ErrorCode::InvalidCategory => ErrorClass::BadRequest,
            ErrorCode::CategoryNotFound
            | ErrorCode::NoCategoryFiles
            | ErrorCode::NoImagesAvailable => ErrorClass::NotFound,
            ErrorCode::CategoryNoValidUrls => ErrorClass::Unprocessable,
            ErrorCode::FileReadFailed | ErrorCode::DirectoryReadFailed => ErrorClass::Internal,
        }
    }

    /// Contextual key/value pairs for logging.
    pub fn metadata(&self) -> Vec<(&'static str, String)> {
        match self {
            CatalogError::InvalidCategory { name } => vec![("category", name.clone())],
            CatalogError::CategoryNotFound { category, path }
            | CatalogError::CategoryNoValidUrls { category, path } => vec![
                ("category", category.clone()),
                ("path", path.display().to_string()),
            ],
            CatalogError::NoCategoryFiles { dir } => vec![("dir", dir.display().to_string())],
            CatalogError::NoImagesAvailable { attempted } => {
                vec![("attempted", attempted.to_string())]
            }
            CatalogError::FileReadFailed { path, cause } => vec![
                ("path", path.display().to_string()),
                ("cause", cause.clone()),
            ],
            CatalogError::DirectoryReadFailed { dir, cause } => vec![
                ("dir", dir.display().to_string()),
                ("cause", cause.clone()),
            ],
        }
    }
}
