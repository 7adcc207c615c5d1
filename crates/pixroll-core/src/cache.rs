use crate::clock::{Clock, SystemClock};
use dashmap::DashMap;
use jiff::{SignedDuration, Timestamp};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Default TTL applied when nothing else is configured.
pub const DEFAULT_TTL_MS: u64 = 30_000;

/// How long cache entries stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTtl {
    /// Caching is off; every lookup misses and writes are dropped.
    Disabled,
    /// Entries expire this long after they were written.
    Enabled(Duration),
}

impl CacheTtl {
    /// Builds a TTL from a millisecond count.
    ///
    /// Zero, negative, NaN and infinite values disable caching. Values too
    /// large for a [`Duration`] saturate at [`Duration::MAX`].
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis <= 0.0 {
            return CacheTtl::Disabled;
        }
        let ttl = Duration::try_from_secs_f64(millis / 1_000.0).unwrap_or(Duration::MAX);
        CacheTtl::Enabled(ttl)
    }

    /// Parses a millisecond count from configuration text.
    ///
    /// Text that is not a number disables caching rather than failing.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(millis) => Self::from_millis(millis),
            Err(_) => CacheTtl::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CacheTtl::Enabled(_))
    }
}

impl Default for CacheTtl {
    fn default() -> Self {
        CacheTtl::Enabled(Duration::from_millis(DEFAULT_TTL_MS))
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Timestamp,
}

/// A path-keyed cache with per-entry expiry.
///
/// Expiry is checked lazily: an entry past its deadline is dropped the next
/// time it is looked up, and nothing runs in the background. The key space is
/// the set of category files and directories, so there is no capacity bound.
#[derive(Clone)]
pub struct TtlCache<V> {
    entries: Arc<DashMap<PathBuf, Entry<V>>>,
    ttl: CacheTtl,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates a cache backed by the system clock.
    pub fn new(ttl: CacheTtl) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: CacheTtl, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> CacheTtl {
        self.ttl
    }

    /// Returns the value stored under `key` if it has not yet expired.
    pub fn get(&self, key: &Path) -> Option<V> {
        if !self.ttl.is_enabled() {
            return None;
        }

        let key = normalize_path(key);
        let now = self.clock.now();

        // The map guard must be released before removing the entry.
        let expired = match self.entries.get(&key) {
            Some(entry) if now < entry.expires_at => {
                trace!(key = %key.display(), "cache hit");
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            // A concurrent `set` may have refreshed the entry in the meantime.
            self.entries
                .remove_if(&key, |_, entry| now >= entry.expires_at);
            trace!(key = %key.display(), "cache entry expired");
        } else {
            trace!(key = %key.display(), "cache miss");
        }
        None
    }

    /// Stores `value` under `key`. Does nothing when caching is disabled.
    pub fn set(&self, key: &Path, value: V) {
        let CacheTtl::Enabled(ttl) = self.ttl else {
            return;
        };

        let ttl = SignedDuration::try_from(ttl).unwrap_or(SignedDuration::MAX);
        let expires_at = self
            .clock
            .now()
            .checked_add(ttl)
            .unwrap_or(Timestamp::MAX);

        self.entries
            .insert(normalize_path(key), Entry { value, expires_at });
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> std::fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Makes `path` absolute and folds away `.` and `..` components.
///
/// This is purely lexical; the path does not need to exist.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
