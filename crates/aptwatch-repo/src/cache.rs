//! Snapshot cache
//!
//! Stores the last-fetched raw index text, one file per
//! (repository, component) key. Contents are kept verbatim so the next fetch
//! stays byte-comparable and the text re-parsable without any serialization
//! format of our own.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::Repository;
use crate::error::{RepoError, Result};

/// Cache key for one (repository, component) snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    /// Derive the filesystem-safe key for a repository component.
    ///
    /// The URL's colons are stripped and slashes flattened to dashes, so the
    /// key is a single path segment, stable across runs, and distinct
    /// repositories map to distinct keys.
    pub fn derive(repo: &Repository, component: &str) -> Self {
        let url = repo.url.replace(':', "").replace('/', "-");
        Self(format!(
            "packages_{}_{}_{}_binary-{}",
            url, repo.distribution, component, repo.architecture
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// On-disk snapshot cache rooted at a single directory.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    root: PathBuf,
}

impl SnapshotCache {
    /// Open the cache at `root`, creating the directory if needed.
    pub fn open_at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| RepoError::Cache {
            message: format!("creating {}: {}", root.display(), e),
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &SnapshotKey) -> PathBuf {
        self.root.join(key.as_str())
    }

    /// Whether a snapshot has been stored for `key`.
    pub fn exists(&self, key: &SnapshotKey) -> bool {
        self.path_for(key).is_file()
    }

    /// Read the stored snapshot text.
    pub fn read(&self, key: &SnapshotKey) -> Result<String> {
        let path = self.path_for(key);
        std::fs::read_to_string(&path).map_err(|e| RepoError::Cache {
            message: format!("reading {}: {}", path.display(), e),
        })
    }

    /// Overwrite the snapshot for `key`.
    ///
    /// The text is staged into a temporary file inside the cache directory
    /// and renamed over the target, so a crash mid-write never leaves a
    /// half-written snapshot to be mistaken for valid state.
    pub fn write(&self, key: &SnapshotKey, contents: &str) -> Result<()> {
        let path = self.path_for(key);

        let staged = (|| -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&self.root)?;
            tmp.write_all(contents.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })();

        staged.map_err(|e| RepoError::Cache {
            message: format!("writing {}: {}", path.display(), e),
        })
    }
}
