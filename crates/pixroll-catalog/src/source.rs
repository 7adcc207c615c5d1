use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Where category listings and file contents come from.
#[async_trait]
pub trait CategorySource: Send + Sync + 'static {
    /// Returns the names of the entries in `dir`, in listing order.
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Reads the file at `path` as UTF-8 text.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads categories from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

#[async_trait]
impl CategorySource for FsSource {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// An in-memory source that counts every access.
///
/// Files live in a flat map keyed by full path; `list_dir` returns the names of
/// files whose parent is the requested directory. Useful for observing how
/// often the cache falls through to the source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    reads: Arc<AtomicUsize>,
    listings: Arc<AtomicUsize>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces the file at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), content.into());
    }

    pub fn remove(&self, path: &Path) {
        self.files
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path);
    }

    /// Number of `read_to_string` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `list_dir` calls so far.
    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategorySource for MemorySource {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        Ok(files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }
}
