use crate::error::CatalogError;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// File extension of category files.
pub const CATEGORY_EXTENSION: &str = "txt";

/// A validated category name.
///
/// Names contain only `[A-Za-z0-9_-]` and are never empty, so a category can
/// be joined onto the base directory without escaping it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Creates a new `Category` after validating the input.
    ///
    /// The input is checked as given; no percent-decoding or other
    /// normalization happens first.
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(CatalogError::InvalidCategory { name });
        }
        Ok(Self(name))
    }

    /// Recovers the category from a listing entry such as `cats.txt`.
    ///
    /// Returns `None` for entries without the category extension or whose
    /// stem is not a valid name.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::new(category_stem(file_name)?).ok()
    }

    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name backing this category, e.g. `cats.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, CATEGORY_EXTENSION)
    }

    /// The path of this category's file under `base_dir`.
    pub fn file_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.file_name())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a directory entry name looks like a category file.
pub fn is_category_file(file_name: &str) -> bool {
    category_stem(file_name).is_some()
}

fn category_stem(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(CATEGORY_EXTENSION)?
        .strip_suffix('.')
}

/// A label for a category file path, used in errors and logs.
pub fn category_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
