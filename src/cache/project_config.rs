//! Per-project configuration cache keyed by file modification time.
//!
//! # Architecture
//!
//! - **Pure core**: [`parse_project_config`] turns file content into a
//!   [`ProjectConfiguration`] and never fails.
//! - **I/O boundary**: [`ConfigFileSource`] stats and reads the file;
//!   [`FsConfigSource`] is the `std::fs` implementation, tests substitute
//!   counting doubles.
//! - **Cache**: [`ProjectConfigStore`] keeps one entry per project in a
//!   `DashMap`. Every lookup performs a stat; content is only re-read when the
//!   modification time differs from the cached one.
//!
//! No shard guard is held across file I/O. Two concurrent misses for the same
//! project may both read the file; each inserts a complete entry, so the last
//! writer wins and readers never observe a partial entry.

use dashmap::DashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::config::project::{parse_project_config, ProjectConfiguration};
use crate::core::{ProjectId, ProjectRef};

/// Access to project configuration files
pub trait ConfigFileSource: Send + Sync {
    /// Modification time of `path`, `None` if the file does not exist
    fn modified(&self, path: &Path) -> io::Result<Option<SystemTime>>;

    /// Full content of `path`, `None` if the file does not exist
    fn read(&self, path: &Path) -> io::Result<Option<Vec<u8>>>;
}

/// [`ConfigFileSource`] backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsConfigSource;

impl ConfigFileSource for FsConfigSource {
    fn modified(&self, path: &Path) -> io::Result<Option<SystemTime>> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata.modified().map(Some),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Cached lookup result together with the modification time it was read at
#[derive(Debug, Clone)]
struct CacheEntry {
    config: Option<Arc<ProjectConfiguration>>,
    modified: Option<SystemTime>,
}

/// Cache statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups for projects with no cache entry
    pub misses: u64,
    /// Lookups that found a stale entry and re-read the file
    pub reloads: u64,
}

/// Thread-safe cache of parsed project configurations
pub struct ProjectConfigStore {
    entries: DashMap<ProjectId, CacheEntry>,
    source: Arc<dyn ConfigFileSource>,
    hits: AtomicU64,
    misses: AtomicU64,
    reloads: AtomicU64,
}

impl std::fmt::Debug for ProjectConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectConfigStore")
            .field("entries", &self.entries.len())
            .field("stats", &self.stats())
            .finish()
    }
}

impl Default for ProjectConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectConfigStore {
    /// Store reading from the local file system
    pub fn new() -> Self {
        Self::with_source(Arc::new(FsConfigSource))
    }

    /// Store using `source` for [`ProjectConfigStore::get_project`]
    pub fn with_source(source: Arc<dyn ConfigFileSource>) -> Self {
        Self {
            entries: DashMap::new(),
            source,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            reloads: AtomicU64::new(0),
        }
    }

    /// Project configuration for `project`, read through the store's own source
    pub fn get_project(&self, project: &ProjectRef) -> Option<Arc<ProjectConfiguration>> {
        self.get(&project.id, &project.config_path, self.source.as_ref())
    }

    /// Project configuration stored at `config_path`, cached under `project_id`.
    ///
    /// Returns `None` when the file is missing, empty, unreadable or not UTF-8.
    /// Failures are logged, never returned.
    pub fn get(
        &self,
        project_id: &ProjectId,
        config_path: &Path,
        source: &dyn ConfigFileSource,
    ) -> Option<Arc<ProjectConfiguration>> {
        let modified = match source.modified(config_path) {
            Ok(modified) => modified,
            Err(e) => {
                log::debug!(
                    "Cannot stat project config {}: {}",
                    config_path.display(),
                    e
                );
                return None;
            }
        };

        let stale = match self.entries.get(project_id) {
            Some(entry) if entry.modified == modified => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return entry.config.clone();
            }
            Some(_) => true,
            None => false,
        };

        if stale {
            self.reloads.fetch_add(1, Ordering::Relaxed);
            log::debug!("Project config for {} changed, reloading", project_id);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        let config = load_project_config(config_path, modified, source);
        self.entries.insert(
            project_id.clone(),
            CacheEntry {
                config: config.clone(),
                modified,
            },
        );
        config
    }

    /// Drop the cached entry for one project
    pub fn invalidate(&self, project_id: &ProjectId) {
        self.entries.remove(project_id);
    }

    /// Drop every cached entry
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            reloads: self.reloads.load(Ordering::Relaxed),
        }
    }
}

/// Read and parse one configuration file (I/O)
fn load_project_config(
    path: &Path,
    modified: Option<SystemTime>,
    source: &dyn ConfigFileSource,
) -> Option<Arc<ProjectConfiguration>> {
    if modified.is_none() {
        log::debug!("Project config file does not exist: {}", path.display());
        return None;
    }

    let bytes = match source.read(path) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            log::debug!("Project config file disappeared: {}", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Failed to read project config {}: {}", path.display(), e);
            return None;
        }
    };

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            log::warn!(
                "Project config {} is not valid UTF-8: {}",
                path.display(),
                e
            );
            return None;
        }
    };

    if content.trim().is_empty() {
        log::debug!("Project config file is empty: {}", path.display());
        return None;
    }

    let config = parse_project_config(&content);
    log::debug!(
        "Loaded project config {}: getterPatterns={:?}, setterPatterns={:?}, enabled={:?}",
        path.display(),
        config.getter_patterns,
        config.setter_patterns,
        config.enabled
    );
    Some(Arc::new(config))
}
