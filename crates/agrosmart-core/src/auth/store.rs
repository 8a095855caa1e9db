use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::RwLock;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// String key-value storage behind a [`SessionStore`](super::SessionStore).
///
/// Reads never fail: an unreadable value is reported as absent.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

/// JSON object on disk, written through on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading existing contents if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse session file: {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if values.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).context("Failed to remove session file")?;
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(values)?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner-only from creation (Unix only)
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options
            .open(&self.path)
            .context("Failed to open session file")?;

        // `mode` only applies to new files; tighten one that already existed.
        #[cfg(unix)]
        {
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                file.set_permissions(perms)?;
            }
        }

        file.write_all(contents.as_bytes())
            .context("Failed to write session file")?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write();
        if values.remove(key).is_some() {
            self.persist(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").expect("remove");
        store.remove("k").expect("remove twice");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("session.json");

        let store = FileStore::open(&path).expect("open");
        store.set("agrosmart_token", "T1").expect("set");
        assert!(path.exists());

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("agrosmart_token").as_deref(), Some("T1"));
    }

    #[test]
    fn test_file_store_removes_file_when_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).expect("open");
        store.set("agrosmart_token", "T1").expect("set");
        store.remove("agrosmart_token").expect("remove");
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_is_private() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).expect("open");
        store.set("agrosmart_token", "T1").expect("set");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_tightens_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let store = FileStore::open(&path).expect("open");
        store.set("agrosmart_token", "T1").expect("set");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("agrosmart_token").as_deref(), Some("T1"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").expect("write");
        assert!(FileStore::open(&path).is_err());
    }
}
