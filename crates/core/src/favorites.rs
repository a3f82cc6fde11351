//! Favorites persistence.
//!
//! Favorites are stored as one Steam app id per line. Every mutation rewrites
//! the whole list; the store never deduplicates.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Read-all / write-all storage for favorite ids.
pub trait FavoritesStore: Send + Sync {
    /// Return every stored id in file order.
    fn load_all(&self) -> Result<Vec<String>>;
    /// Replace the stored list with `ids`.
    fn save_all(&self, ids: &[String]) -> Result<()>;
}

/// How [`FileFavoritesStore`] rewrites its file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate and rewrite the file in place.
    #[default]
    Overwrite,
    /// Write a sibling temp file and rename it over the target.
    Atomic,
}

/// Line-delimited favorites file.
#[derive(Debug, Clone)]
pub struct FileFavoritesStore {
    path: PathBuf,
    mode: WriteMode,
}

impl FileFavoritesStore {
    /// Store backed by `path`, rewritten according to `mode`.
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, "")
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        info!(path = %self.path.display(), "Created empty favorites file");
        Ok(())
    }

    fn write_atomic(&self, contents: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        temp.write_all(contents.as_bytes())
            .context("failed to write favorites temp file")?;
        temp.persist(&self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl FavoritesStore for FileFavoritesStore {
    fn load_all(&self) -> Result<Vec<String>> {
        self.ensure_exists()?;
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn save_all(&self, ids: &[String]) -> Result<()> {
        let contents: String = ids.iter().map(|id| format!("{id}\n")).collect();
        debug!(path = %self.path.display(), count = ids.len(), mode = ?self.mode, "Writing favorites");
        match self.mode {
            WriteMode::Overwrite => {
                if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                fs::write(&self.path, contents)
                    .with_context(|| format!("failed to write {}", self.path.display()))
            }
            WriteMode::Atomic => self.write_atomic(&contents),
        }
    }
}

/// Favorites held in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryFavoritesStore {
    ids: Mutex<Vec<String>>,
}

impl MemoryFavoritesStore {
    /// Store pre-populated with `ids`.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<String> {
        self.ids.lock().clone()
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn load_all(&self) -> Result<Vec<String>> {
        Ok(self.ids.lock().clone())
    }

    fn save_all(&self, ids: &[String]) -> Result<()> {
        *self.ids.lock() = ids.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_empty() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("favorites.txt");
        let store = FileFavoritesStore::new(&path, WriteMode::Overwrite);

        assert!(store.load_all()?.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn round_trip_keeps_order_and_duplicates() -> Result<()> {
        let dir = tempdir()?;
        let store = FileFavoritesStore::new(dir.path().join("favorites.txt"), WriteMode::Overwrite);
        let ids = vec!["220".to_string(), "70".to_string(), "220".to_string()];

        store.save_all(&ids)?;
        assert_eq!(fs::read_to_string(store.path())?, "220\n70\n220\n");
        assert_eq!(store.load_all()?, ids);

        store.save_all(&[])?;
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn lines_are_loaded_verbatim() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("favorites.txt");
        fs::write(&path, "220 \n70\n")?;
        let store = FileFavoritesStore::new(&path, WriteMode::Overwrite);
        assert_eq!(store.load_all()?, vec!["220 ".to_string(), "70".to_string()]);
        Ok(())
    }

    #[test]
    fn atomic_mode_writes_same_contents() -> Result<()> {
        let dir = tempdir()?;
        let plain = FileFavoritesStore::new(dir.path().join("plain.txt"), WriteMode::Overwrite);
        let atomic = FileFavoritesStore::new(dir.path().join("atomic.txt"), WriteMode::Atomic);
        let ids = vec!["10".to_string(), "730".to_string()];

        plain.save_all(&ids)?;
        atomic.save_all(&ids)?;
        assert_eq!(
            fs::read_to_string(plain.path())?,
            fs::read_to_string(atomic.path())?
        );

        atomic.save_all(&ids[..1])?;
        assert_eq!(atomic.load_all()?, vec!["10".to_string()]);
        Ok(())
    }

    #[test]
    fn memory_store_replaces_contents() -> Result<()> {
        let store = MemoryFavoritesStore::with_ids(["1", "2"]);
        store.save_all(&["3".to_string()])?;
        assert_eq!(store.load_all()?, vec!["3".to_string()]);
        assert_eq!(store.snapshot(), vec!["3".to_string()]);
        Ok(())
    }
}
