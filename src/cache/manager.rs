//! Cache manager for persisting catalog responses to disk
//!
//! Provides a `CacheManager` that stores serializable data to JSON files with
//! expiry timestamps. The catalog client only reuses entries that are still
//! inside their cache window.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: DateTime<Utc>,
}

/// Just the expiry of an entry, for pruning without decoding the payload
#[derive(Debug, Deserialize)]
struct CacheStamp {
    expires_at: DateTime<Utc>,
}

/// Longest readable part of a cache file name
const MAX_STEM_LEN: usize = 80;

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Manages reading and writing cached data to disk
///
/// The cache manager stores data as JSON files in an XDG-compliant cache directory
/// (`~/.cache/pokedex/` on Linux). Each cache entry includes an expiry timestamp;
/// expired entries are still returned with `is_expired = true` and it is up to the
/// caller whether to use them.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "pokedex")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Directory the cache files live in
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Turns an arbitrary key (usually a request URL) into a safe file stem
    ///
    /// The readable part keeps only alphanumerics, so distinct keys can share
    /// it; the blake3 suffix of the full key keeps file names distinct.
    pub fn sanitize_key(key: &str) -> String {
        let readable: String = key
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .take(MAX_STEM_LEN)
            .collect();
        let hash = blake3::hash(key.as_bytes());
        format!("{}-{}", readable.trim_matches('_'), &hash.to_hex()[..16])
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}.json", Self::sanitize_key(key)))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes data to the cache with the given time-to-live
    ///
    /// # Arguments
    /// * `key` - Unique identifier for the cache entry (e.g., a request URL)
    /// * `data` - The data to cache (must implement Serialize)
    /// * `ttl` - How long the cache entry should be considered fresh
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn write<T: Serialize>(&self, key: &str, data: &T, ttl: Duration) -> std::io::Result<()> {
        self.ensure_dir()?;

        let now = Utc::now();
        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at: now + ttl,
        };

        let json = serde_json::to_string(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads data from the cache
    ///
    /// # Returns
    /// * `Some(CachedData<T>)` if the entry exists and can be parsed
    /// * `None` if the entry doesn't exist or parsing fails
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(path).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        let now = Utc::now();
        let is_expired = now > entry.expires_at;

        Some(CachedData {
            data: entry.data,
            cached_at: entry.cached_at,
            is_expired,
        })
    }

    /// Deletes every entry whose window has passed
    ///
    /// Files that are not cache entries are left alone.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    /// * `Err` if the cache directory cannot be listed
    pub fn prune_expired(&self) -> std::io::Result<usize> {
        if !self.cache_dir.exists() {
            return Ok(0);
        }

        let now = Utc::now();
        let mut removed = 0;
        for entry in fs::read_dir(&self.cache_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(stamp) = serde_json::from_str::<CacheStamp>(&content) else {
                continue;
            };
            if now > stamp.expires_at && fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Reads data only if it is still inside its cache window
    pub fn read_fresh<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.read(key)
            .filter(|cached: &CachedData<T>| !cached.is_expired)
            .map(|cached| cached.data)
    }
}
